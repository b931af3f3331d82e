//! Naming nouns, verb agreement, and word wrapping.

use mf_core::{Noun, NounId, Person, Phrase, Relationship, World};

/// "the yellow key", or the bare name for proper nouns.
pub fn definite(world: &World, id: NounId) -> String {
    let noun = &world[id];
    if noun.is_proper() {
        noun.name.clone()
    } else {
        format!("the {}", noun.name)
    }
}

/// "a yellow key", or the bare name for proper nouns.
pub fn indefinite(world: &World, id: NounId) -> String {
    let noun = &world[id];
    if noun.is_proper() {
        noun.name.clone()
    } else {
        format!("{} {}", noun.article, noun.name)
    }
}

/// The definite name with its first letter capitalized, for sentence starts.
pub fn subject(world: &World, id: NounId) -> String {
    capitalize(&definite(world, id))
}

/// "am", "are", or "is".
pub fn be(noun: &Noun) -> &'static str {
    match noun.person {
        Person::First if !noun.plural => "am",
        Person::Third if !noun.plural => "is",
        _ => "are",
    }
}

/// Present tense of a regular verb: "take" for you and them, "takes" for it.
pub fn conjugate(noun: &Noun, verb: &str) -> String {
    if noun.person == Person::Third && !noun.plural {
        if verb.ends_with('s') || verb.ends_with("sh") || verb.ends_with("ch") {
            format!("{verb}es")
        } else {
            format!("{verb}s")
        }
    } else {
        verb.to_string()
    }
}

/// Describe a child relative to its parent: " in the box",
/// " that you are wearing".
pub fn qualifier(world: &World, parent: NounId, relationship: &Relationship) -> String {
    match relationship.phrase() {
        Phrase::Preposition(preposition) => {
            format!(" {preposition} {}", definite(world, parent))
        }
        Phrase::Clause(verb) => format!(
            " that {} {} {verb}",
            definite(world, parent),
            be(&world[parent])
        ),
    }
}

/// Join items as "a, b and c".
pub fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

/// Uppercase the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Greedy word wrap at `width` columns. Zero disables wrapping; existing line
/// breaks are kept.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let mut lines = Vec::new();
    for source_line in text.split('\n') {
        let mut line = String::new();
        for word in source_line.split_whitespace() {
            if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines.join("\n")
}
