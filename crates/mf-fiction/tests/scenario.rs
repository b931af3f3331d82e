use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use mf_core::component::{Container, Openable};
use mf_core::{Noun, Person, Relationship};
use mf_fiction::sentence::enumerate;
use mf_fiction::{
    FictionError, FictionResult, Menu, ReplayMenu, Transcript, Universe, compare_transcripts,
    demo, turn,
};

/// A menu that picks options by their text and remembers every menu shown.
#[derive(Clone, Default)]
struct Script {
    picks: Rc<RefCell<VecDeque<String>>>,
    seen: Rc<RefCell<Vec<(String, Vec<String>)>>>,
}

impl Script {
    fn new(picks: &[&str]) -> Self {
        Self {
            picks: Rc::new(RefCell::new(picks.iter().map(|p| p.to_string()).collect())),
            seen: Rc::default(),
        }
    }

    fn menus(&self) -> Vec<(String, Vec<String>)> {
        self.seen.borrow().clone()
    }

    /// Top-level menus, in order.
    fn turns(&self) -> Vec<Vec<String>> {
        self.menus()
            .into_iter()
            .filter(|(prompt, _)| prompt == mf_fiction::turn::PROMPT)
            .map(|(_, options)| options)
            .collect()
    }

    fn options_for(&self, prompt: &str) -> Vec<Vec<String>> {
        self.menus()
            .into_iter()
            .filter(|(p, _)| p == prompt)
            .map(|(_, options)| options)
            .collect()
    }
}

impl Menu for Script {
    fn choose(&mut self, prompt: &str, options: &[String]) -> FictionResult<usize> {
        self.seen
            .borrow_mut()
            .push((prompt.to_string(), options.to_vec()));
        let pick = self
            .picks
            .borrow_mut()
            .pop_front()
            .ok_or(FictionError::ChoicesExhausted)?;
        match options.iter().position(|option| *option == pick) {
            Some(index) => Ok(index),
            None => panic!("{pick:?} is not offered at {prompt:?}: {options:?}"),
        }
    }
}

fn play(picks: &[&str]) -> (Universe, Transcript, Script) {
    let transcript = Transcript::new();
    let script = Script::new(picks);
    let mut universe = demo::build(transcript.clone(), script.clone()).unwrap();
    turn(&mut universe, true).unwrap();
    (universe, transcript, script)
}

fn rows(universe: &Universe) -> Vec<String> {
    let actions = universe.actions();
    enumerate(universe, &actions)
        .iter()
        .map(|sentence| sentence.row(&actions))
        .collect()
}

#[test]
fn opening_scene() {
    let (_, transcript, script) = play(&["Wait", "Quit"]);
    assert_eq!(
        script.turns()[0],
        vec![
            "Look",
            "Go north",
            "Get into the wagon",
            "Push the cart north",
            "Take something",
            "Turn on the lamp",
            "Examine something",
            "Wait",
            "Quit",
        ]
    );
    insta::assert_snapshot!(transcript.contents().trim_end(), @r"
    You wake on a cold floor with no memory of how you got here. Somewhere
    beyond the yellow door, someone is whistling.
    Room A
    A bare room with whitewashed walls. A doorway leads north, and a yellow
    door is set in the west wall.
    Room A is containing:
      - a lamp
      - a hat
      - an apple
      - a cart
      - a wagon
    Exits: north, west.
    > Wait
    Time passes.
    > Quit
    Goodbye.
    ");
}

#[test]
fn unlocking_the_yellow_door() {
    let picks = [
        "Take something",
        "the lamp",
        "Turn on the lamp",
        "Go north",
        "Open the box",
        "Take something",
        "the yellow key",
        "Go south",
        "Unlock the yellow door with something",
        "the yellow key",
        "Open the yellow door",
        "Go some way",
        "west",
        "Quit",
    ];
    let (universe, transcript, script) = play(&picks);

    // Until the door is open, the only way out of Room A is north.
    let turns = script.turns();
    for (index, rows) in turns.iter().enumerate().take(8) {
        assert!(
            !rows.iter().any(|row| row == "Go west" || row == "Go some way"),
            "turn {index} offered a way west: {rows:?}"
        );
    }
    assert_eq!(
        script.options_for("Take what in the box?"),
        vec![vec!["the yellow key", "the red key"]]
    );
    assert_eq!(
        script.options_for("Unlock the yellow door with what?"),
        vec![vec!["the lamp", "the yellow key"]]
    );
    assert_eq!(
        script.options_for("Go which way?"),
        vec![vec!["north", "west"]]
    );

    let world = universe.world();
    let room_c = world.find_by_name("Room C").unwrap();
    assert_eq!(world.parent(universe.player()).unwrap(), room_c);
    assert!(
        world[room_c]
            .components
            .room
            .as_ref()
            .is_some_and(|room| room.visited)
    );
    assert_eq!(universe.choice_log().len(), picks.len());

    let contents = transcript.contents();
    assert!(contents.contains("Opening the box reveals a yellow key and a red key.\n"));
    assert!(contents.contains("You unlock the yellow door with the yellow key.\n"));
    assert!(contents.contains("Room C\nA sunny parlour with a perch by the window.\n"));
}

#[test]
fn the_wrong_key_does_not_fit() {
    let (universe, transcript, _) = play(&[
        "Take something",
        "the lamp",
        "Turn on the lamp",
        "Go north",
        "Open the box",
        "Take something",
        "the red key",
        "Go south",
        "Unlock the yellow door with something",
        "the red key",
        "Quit",
    ]);
    assert!(
        transcript
            .contents()
            .contains("The red key doesn't fit the yellow door.\n")
    );
    let door = universe.world().find_by_name("yellow door").unwrap();
    assert!(universe.world()[door].components.is_locked());
}

#[test]
fn darkness_hides_the_room() {
    let (_, transcript, script) = play(&["Go north", "Quit"]);
    assert!(transcript.contents().contains("> Go north\nIn darkness.\n"));
    assert_eq!(script.turns()[1], vec!["Look", "Go south", "Wait", "Quit"]);
}

#[test]
fn darkness_still_reaches_what_you_hold() {
    let (_, _, script) = play(&["Take something", "the hat", "Go north", "Quit"]);
    assert_eq!(
        script.turns()[2],
        vec![
            "Look",
            "Go south",
            "Drop the hat",
            "Wear the hat",
            "Take inventory",
            "Wait",
            "Quit",
        ]
    );
}

#[test]
fn carried_things_are_not_offered_to_take() {
    let (_, _, script) = play(&[
        "Take something",
        "the lamp",
        "Take something",
        "the hat",
        "Quit",
    ]);
    assert_eq!(
        script.options_for("Take what?"),
        vec![
            vec!["the lamp", "the hat", "the apple"],
            vec!["the hat", "the apple"],
        ]
    );
    assert!(script.turns()[2].contains(&"Take the apple".to_string()));
}

#[test]
fn riding_the_wagon() {
    let (universe, _, script) = play(&[
        "Get into the wagon",
        "Go north",
        "Go south",
        "Get out",
        "Quit",
    ]);
    let world = universe.world();
    let room_a = world.find_by_name("Room A").unwrap();
    let wagon = world.find_by_name("wagon").unwrap();
    assert_eq!(world.parent(wagon).unwrap(), room_a);
    assert_eq!(world.parent(universe.player()).unwrap(), room_a);
    assert!(!script.turns()[4].contains(&"Get out".to_string()));
}

#[test]
fn nothing_is_put_into_itself() {
    let player = Noun::new("you").with_article("").with_person(Person::Second);
    let mut universe = Universe::new(player, Transcript::new(), ReplayMenu::default());
    let room = universe.add(Noun::room("Hall"));
    let bag = universe.add(Noun::new("bag").with(|c| {
        c.container = Some(Container::default());
        c.openable = Some(Openable { closed: false });
    }));
    let player = universe.player();
    universe
        .set_relationship(room, player, Relationship::Containing)
        .unwrap();
    universe
        .set_relationship(player, bag, Relationship::Carrying)
        .unwrap();
    assert!(!rows(&universe).iter().any(|row| row.starts_with("Put")));

    let coin = universe.add(Noun::new("coin"));
    universe
        .set_relationship(player, coin, Relationship::Carrying)
        .unwrap();
    assert!(rows(&universe).contains(&"Put the coin into the bag".to_string()));
}

#[test]
fn replaying_the_log_reproduces_the_transcript() {
    let (universe, first, _) = play(&[
        "Take something",
        "the apple",
        "Eat the apple",
        "Take something",
        "the hat",
        "Wear the hat",
        "Take inventory",
        "Quit",
    ]);
    assert!(first.contents().contains("You eat the apple.\n"));
    assert!(first.contents().contains("You are wearing a hat.\n"));

    let second = Transcript::new();
    let mut replay =
        demo::build(second.clone(), ReplayMenu::new(universe.choice_log())).unwrap();
    turn(&mut replay, true).unwrap();
    assert_eq!(compare_transcripts(&first.contents(), &second.contents()), Ok(()));
    assert_eq!(first.contents(), second.contents());
    assert_eq!(replay.choice_log(), universe.choice_log());
}
