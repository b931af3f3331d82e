//! Sentence enumeration and disambiguation.
//!
//! Every registered action whose domains all yield candidates becomes one
//! top-level menu row. Ambiguous arguments are kept as a tree of questions
//! and only asked once the player has picked the row.

use mf_core::World;

use crate::actions::{ActionId, ActionRegistry};
use crate::domain::{Domain, Node};
use crate::error::FictionResult;
use crate::narrator::{capitalize, definite, qualifier};
use crate::possibility::{Action, Target};
use crate::universe::Universe;

/// A resolved argument, with the rest of the sentence hanging off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concrete {
    /// How the argument reads in a sentence ("the yellow key", "west").
    pub text: String,
    pub target: Target,
    /// Answer for the next argument, given this one.
    pub next: Option<Box<Answer>>,
}

/// A choice the player still has to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Phrase locating the candidates (" in the box"). Empty at the top.
    pub qualifier: String,
    pub domain: Domain,
    /// Two or more answers.
    pub answers: Vec<Answer>,
}

/// An argument: either settled or still a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Concrete(Concrete),
    Ambiguous(Question),
}

impl Answer {
    /// Label shown for this answer among its siblings.
    pub fn label(&self) -> String {
        match self {
            Self::Concrete(concrete) => concrete.text.clone(),
            Self::Ambiguous(question) => {
                format!("{}{}", question.domain.placeholder(), question.qualifier)
            }
        }
    }
}

/// One top-level menu row: an action and its argument tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub action: ActionId,
    /// `None` for actions without arguments.
    pub answer: Option<Answer>,
}

impl Sentence {
    /// The row shown in the top-level menu. Arguments still in question read
    /// as placeholders ("Take something").
    pub fn row(&self, actions: &ActionRegistry) -> String {
        let action = &actions[self.action];
        let mut parts = Vec::new();
        let mut current = self.answer.as_ref();
        for domain in action.domains() {
            match current {
                Some(Answer::Concrete(concrete)) => {
                    parts.push(concrete.text.clone());
                    current = concrete.next.as_deref();
                }
                _ => {
                    parts.push(domain.placeholder().to_string());
                    current = None;
                }
            }
        }
        capitalize(&action.render(&parts))
    }
}

/// A fully resolved sentence, ready to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: ActionId,
    pub arguments: Vec<Target>,
    /// Rendered sentence ("Take the yellow key").
    pub text: String,
}

/// Every sentence the player could say right now, in registration order.
pub fn enumerate(universe: &Universe, actions: &ActionRegistry) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    for (id, action) in actions.iter() {
        if !action.gate(universe) {
            continue;
        }
        if action.domains().is_empty() {
            sentences.push(Sentence {
                action: id,
                answer: None,
            });
            continue;
        }
        if let Some(answer) = resolve(universe, action, 0, &mut Vec::new()) {
            sentences.push(Sentence {
                action: id,
                answer: Some(answer),
            });
        }
    }
    sentences
}

/// Resolve the argument at `position` and everything after it.
///
/// Returns `None` when no candidate leads to a complete sentence.
fn resolve(
    universe: &Universe,
    action: &dyn Action,
    position: usize,
    sentence: &mut Vec<Target>,
) -> Option<Answer> {
    let domain = action.domains()[position];
    let nodes = domain.candidates(universe, action, sentence);
    let answers = nodes
        .iter()
        .filter_map(|node| complete(universe, action, position, sentence, node))
        .collect();
    settle(answers, String::new(), domain)
}

fn complete(
    universe: &Universe,
    action: &dyn Action,
    position: usize,
    sentence: &mut Vec<Target>,
    node: &Node,
) -> Option<Answer> {
    let domain = action.domains()[position];
    match node {
        Node::Leaf(target) => {
            let next = if position + 1 < action.domains().len() {
                sentence.push(target.clone());
                let next = resolve(universe, action, position + 1, sentence);
                sentence.pop();
                Some(Box::new(next?))
            } else {
                None
            };
            Some(Answer::Concrete(Concrete {
                text: label(universe.world(), target),
                target: target.clone(),
                next,
            }))
        }
        Node::Group {
            parent,
            relationship,
            members,
        } => {
            let answers = members
                .iter()
                .filter_map(|member| complete(universe, action, position, sentence, member))
                .collect();
            settle(
                answers,
                qualifier(universe.world(), *parent, relationship),
                domain,
            )
        }
    }
}

/// Drop empty questions and collapse questions with a single answer.
fn settle(mut answers: Vec<Answer>, qualifier: String, domain: Domain) -> Option<Answer> {
    match answers.len() {
        0 => None,
        1 => answers.pop(),
        _ => Some(Answer::Ambiguous(Question {
            qualifier,
            domain,
            answers,
        })),
    }
}

fn label(world: &World, target: &Target) -> String {
    match target {
        Target::Noun(id) => definite(world, *id),
        Target::Exit(exit) => exit.direction.name().to_string(),
        Target::Line { said, .. } => format!("\"{said}\""),
    }
}

/// Ask follow-up questions until every argument of `sentence` is concrete.
///
/// Each prompt repeats the parts already settled ("Put the lamp into what?").
pub fn disambiguate(
    universe: &mut Universe,
    actions: &ActionRegistry,
    sentence: &Sentence,
) -> FictionResult<Command> {
    let action = &actions[sentence.action];
    let mut texts = Vec::new();
    let mut arguments = Vec::new();
    let mut current = sentence.answer.as_ref();

    while let Some(answer) = current {
        match answer {
            Answer::Concrete(concrete) => {
                texts.push(concrete.text.clone());
                arguments.push(concrete.target.clone());
                current = concrete.next.as_deref();
            }
            Answer::Ambiguous(question) => {
                let mut parts = texts.clone();
                parts.push(format!(
                    "{}{}",
                    question.domain.interrogative(),
                    question.qualifier
                ));
                parts.extend(
                    action
                        .domains()
                        .iter()
                        .skip(texts.len() + 1)
                        .map(|domain| domain.placeholder().to_string()),
                );
                let prompt = format!("{}?", capitalize(&action.render(&parts)));
                let options: Vec<String> = question.answers.iter().map(Answer::label).collect();
                let index = universe.choose(&prompt, &options)?;
                current = question.answers.get(index);
            }
        }
    }

    Ok(Command {
        action: sentence.action,
        arguments,
        text: capitalize(&action.render(&texts)),
    })
}

#[cfg(test)]
mod tests {
    use mf_core::component::{Container, Handleable, Openable};
    use mf_core::{Noun, NounId, Person, Relationship};

    use super::*;
    use crate::interface::{ReplayMenu, Transcript};

    struct Room {
        universe: Universe,
        chest: NounId,
        key: NounId,
        coin: NounId,
    }

    fn room(choices: &[usize]) -> Room {
        let player = Noun::new("you").with_article("").with_person(Person::Second);
        let mut universe = Universe::new(
            player,
            Transcript::new(),
            ReplayMenu::from_choices(choices.iter().copied()),
        );
        let hall = universe.add(Noun::room("Hall"));
        let handleable = |c: &mut mf_core::ComponentSet| c.handleable = Some(Handleable::default());
        let chest = universe.add(Noun::new("box").with(|c| {
            c.openable = Some(Openable { closed: false });
            c.container = Some(Container::default());
            c.handleable = Some(Handleable::default());
        }));
        let key = universe.add(Noun::new("key").with(handleable));
        let coin = universe.add(Noun::new("coin").with(handleable));
        let player = universe.player();
        for (parent, child) in [(hall, player), (hall, chest), (chest, key), (chest, coin)] {
            universe
                .set_relationship(parent, child, Relationship::Containing)
                .unwrap();
        }
        Room {
            universe,
            chest,
            key,
            coin,
        }
    }

    fn sentence_for(universe: &Universe, actions: &ActionRegistry, name: &str) -> Option<Sentence> {
        let id = actions.find(name)?;
        enumerate(universe, actions)
            .into_iter()
            .find(|sentence| sentence.action == id)
    }

    #[test]
    fn nested_groups_become_nested_questions() {
        let mut room = room(&[2, 2]);
        let actions = room.universe.actions();
        let take = sentence_for(&room.universe, &actions, "take").unwrap();
        insta::assert_snapshot!(take.row(&actions), @"Take something");

        let Some(Answer::Ambiguous(top)) = &take.answer else {
            panic!("expected a question");
        };
        let labels: Vec<String> = top.answers.iter().map(Answer::label).collect();
        assert_eq!(labels, vec!["the box", "something in the box"]);

        let command = disambiguate(&mut room.universe, &actions, &take).unwrap();
        assert_eq!(command.text, "Take the coin");
        assert_eq!(command.arguments, vec![Target::Noun(room.coin)]);
        assert_eq!(room.universe.choice_log().iter().collect::<Vec<_>>(), vec![2, 2]);
    }

    #[test]
    fn a_thing_cannot_be_put_into_itself() {
        let mut room = room(&[]);
        let player = room.universe.player();
        for thing in [room.chest, room.key] {
            room.universe
                .set_relationship(player, thing, Relationship::Carrying)
                .unwrap();
        }
        let actions = room.universe.actions();
        let put = sentence_for(&room.universe, &actions, "put into").unwrap();
        assert_eq!(put.row(&actions), "Put the key into the box");
        let command = disambiguate(&mut room.universe, &actions, &put).unwrap();
        assert_eq!(
            command.arguments,
            vec![Target::Noun(room.key), Target::Noun(room.chest)]
        );
        assert!(room.universe.choice_log().is_empty());
    }

    #[test]
    fn dead_ends_are_pruned() {
        let room = room(&[]);
        let actions = room.universe.actions();
        // Nothing carried: no inventory argument, so none of these are offered.
        for name in ["drop", "put into", "eat", "wear", "inventory"] {
            assert!(
                sentence_for(&room.universe, &actions, name).is_none(),
                "{name} should not be offered"
            );
        }
        assert!(sentence_for(&room.universe, &actions, "wait").is_some());
    }

    #[test]
    fn prompts_keep_settled_parts() {
        let mut room = room(&[1]);
        let player = room.universe.player();
        room.universe
            .set_relationship(player, room.key, Relationship::Carrying)
            .unwrap();
        let other = room.universe.add(Noun::new("crate").with(|c| {
            c.container = Some(Container::default());
        }));
        let hall = room.universe.world().parent(player).unwrap();
        room.universe
            .set_relationship(hall, other, Relationship::Containing)
            .unwrap();

        let actions = room.universe.actions();
        let put = sentence_for(&room.universe, &actions, "put into").unwrap();
        assert_eq!(put.row(&actions), "Put the key into something");
        let command = disambiguate(&mut room.universe, &actions, &put).unwrap();
        assert_eq!(command.text, "Put the key into the box");
    }
}
