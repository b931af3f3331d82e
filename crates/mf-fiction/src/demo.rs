//! A small sample world: three rooms, a locked door, a dark storeroom.

use mf_core::component::{
    Container, Dialog, Edible, Handleable, LightSource, Lockable, Openable, Pushable, RoomState,
    Supporter, Vehicle, Wearable,
};
use mf_core::{Direction, Noun, NounId, Person, Relationship, World};

use crate::error::FictionResult;
use crate::interface::{Menu, Output};
use crate::universe::Universe;

const INTRODUCTION: &str = "You wake on a cold floor with no memory of how you got here. \
    Somewhere beyond the yellow door, someone is whistling.";

fn lamp_description(world: &World, id: NounId) -> String {
    if world[id].components.is_shining() {
        "A battered brass lamp, burning steadily.".to_string()
    } else {
        "A battered brass lamp. It is dark.".to_string()
    }
}

fn handleable(noun: Noun) -> Noun {
    noun.with(|c| c.handleable = Some(Handleable::default()))
}

/// Build the sample world around a second-person player.
///
/// Room A is lit and holds the player, an unlit lamp, a hat, an apple, a
/// cart, and a wagon. A locked yellow door leads west to Room C, where a
/// parrot waits. Room B, north of A, is dark and holds a closed box with
/// the yellow and red keys.
pub fn build(output: impl Output + 'static, menu: impl Menu + 'static) -> FictionResult<Universe> {
    let player = Noun::new("you")
        .with_article("")
        .with_person(Person::Second)
        .with_description("As good-looking as ever.");
    let mut universe = Universe::new(player, output, menu).with_introduction(INTRODUCTION);

    let room_a = universe.add(Noun::room("Room A").with_description(
        "A bare room with whitewashed walls. A doorway leads north, and a yellow door \
         is set in the west wall.",
    ));
    let room_b = universe.add(
        Noun::room("Room B")
            .with_description("A cramped storeroom that smells of dust.")
            .with(|c| {
                c.room = Some(RoomState {
                    visited: false,
                    lit: false,
                })
            }),
    );
    let room_c = universe.add(
        Noun::room("Room C").with_description("A sunny parlour with a perch by the window."),
    );

    let yellow_key = universe.add(handleable(
        Noun::new("yellow key").with_description("A small key painted yellow."),
    ));
    let red_key = universe.add(handleable(
        Noun::new("red key").with_description("A small key painted red."),
    ));
    let door = universe.add(
        Noun::door("yellow door")
            .with_description("A sturdy door painted a cheerful yellow.")
            .with(|c| {
                c.openable = Some(Openable { closed: true });
                c.lockable = Some(Lockable {
                    key: yellow_key,
                    locked: true,
                });
            }),
    );

    let lamp = universe.add(
        handleable(Noun::new("lamp"))
            .with_computed_description(lamp_description)
            .with(|c| c.light = Some(LightSource::default())),
    );
    let hat = universe.add(handleable(
        Noun::new("hat")
            .with_description("A floppy felt hat.")
            .with(|c| c.wearable = Some(Wearable)),
    ));
    let apple = universe.add(handleable(
        Noun::new("apple")
            .with_article("an")
            .with_description("Red and shiny.")
            .with(|c| c.edible = Some(Edible)),
    ));
    let cart = universe.add(
        Noun::new("cart")
            .with_description("A low cart on squeaky wheels.")
            .with(|c| {
                c.pushable = Some(Pushable);
                c.supporter = Some(Supporter);
            }),
    );
    let wagon = universe.add(
        Noun::new("wagon")
            .with_description("A toy wagon, just big enough to sit in.")
            .with(|c| {
                c.vehicle = Some(Vehicle);
                c.container = Some(Container {
                    transparent: false,
                    enterable: true,
                });
            }),
    );
    let chest = universe.add(
        Noun::new("box")
            .with_description("A plain wooden box.")
            .with(|c| {
                c.openable = Some(Openable { closed: true });
                c.container = Some(Container::default());
            }),
    );
    let parrot = universe.add(
        Noun::new("parrot")
            .with_description("A green parrot eyeing you sideways.")
            .with(|c| {
                c.dialog = Some(
                    Dialog::default()
                        .with_line("hello", "Hello! Hello!")
                        .with_line("who whistles?", "Polly whistles!"),
                )
            }),
    );

    let player = universe.player();
    for thing in [player, lamp, hat, apple, cart, wagon] {
        universe.set_relationship(room_a, thing, Relationship::Containing)?;
    }
    universe.set_relationship(room_b, chest, Relationship::Containing)?;
    universe.set_relationship(chest, yellow_key, Relationship::Containing)?;
    universe.set_relationship(chest, red_key, Relationship::Containing)?;
    universe.set_relationship(room_c, parrot, Relationship::Containing)?;

    universe.set_exit(room_a, room_b, Direction::North, false)?;
    universe.set_exit_through(room_a, door, room_c, Direction::West, false)?;

    Ok(universe)
}
