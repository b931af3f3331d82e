//! Talking to things that talk back.

use mf_core::World;

use super::{line_arg, narrate, noun_has, part};
use crate::domain::Domain;
use crate::error::FictionResult;
use crate::narrator::{conjugate, subject};
use crate::possibility::{Action, Target};
use crate::universe::Universe;

/// Say one of the addressee's remaining lines. Each line can be said once.
pub struct Say;

impl Action for Say {
    fn name(&self) -> &str {
        "say"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Visible, Domain::Dialog]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        match domain {
            Domain::Visible => noun_has(world, target, |c| c.dialog.is_some()),
            Domain::Dialog => matches!(target, Target::Line { .. }),
            _ => false,
        }
    }

    fn render(&self, parts: &[String]) -> String {
        format!("say {} to {}", part(parts, 1), part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let (speaker, said) = line_arg(arguments, 1, self.name())?;
        let reply = universe.world_mut()[speaker]
            .components
            .dialog
            .as_mut()
            .and_then(|dialog| dialog.take(said));

        narrate(universe, "say", &format!("\"{said}\""));
        if let Some(reply) = reply {
            let world = universe.world();
            let text = format!(
                "{} {}: \"{reply}\"",
                subject(world, speaker),
                conjugate(&world[speaker], "say")
            );
            universe.say(&text);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use mf_core::component::Dialog;
    use mf_core::{Noun, Person, Relationship};

    use super::*;
    use crate::actions::ActionRegistry;
    use crate::interface::{ReplayMenu, Transcript};
    use crate::sentence::{disambiguate, enumerate};

    #[test]
    fn lines_are_consumed_once_said() {
        let transcript = Transcript::new();
        let player = Noun::new("you").with_article("").with_person(Person::Second);
        let mut universe = Universe::new(player, transcript.clone(), ReplayMenu::from_choices([2]))
            .with_actions({
                let mut actions = ActionRegistry::new();
                actions.register(Say);
                actions
            });
        let room = universe.add(Noun::room("Study"));
        let parrot = universe.add(Noun::new("parrot").with(|c| {
            c.dialog = Some(
                Dialog::default()
                    .with_line("hello", "Hello!")
                    .with_line("cracker?", "Squawk!"),
            );
        }));
        let player = universe.player();
        universe
            .set_relationship(room, player, Relationship::Containing)
            .unwrap();
        universe
            .set_relationship(room, parrot, Relationship::Containing)
            .unwrap();

        let actions = universe.actions();
        let sentences = enumerate(&universe, &actions);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].row(&actions), "Say something to the parrot");

        let command = disambiguate(&mut universe, &actions, &sentences[0]).unwrap();
        assert_eq!(command.text, "Say \"cracker?\" to the parrot");
        Say.perform(&mut universe, &command.arguments).unwrap();
        assert_eq!(
            transcript.contents(),
            "You say \"cracker?\".\nThe parrot says: \"Squawk!\"\n"
        );

        let sentences = enumerate(&universe, &actions);
        assert_eq!(sentences[0].row(&actions), "Say \"hello\" to the parrot");

        universe.world_mut()[parrot]
            .components
            .dialog
            .as_mut()
            .unwrap()
            .lines
            .clear();
        assert!(enumerate(&universe, &actions).is_empty());
    }
}
