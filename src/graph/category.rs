//! Word categories and the finer word classes.
//!
//! A synset belongs to exactly one [`WordCategory`] and one [`WordClass`].
//! Classes are category-dependent: each class names the categories it may
//! combine with, and the graph builder rejects invalid combinations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The part-of-speech category of a synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordCategory {
    /// Adjectives.
    Adjective,
    /// Nouns.
    Noun,
    /// Verbs.
    Verb,
}

impl WordCategory {
    /// All categories, in a fixed order.
    pub const ALL: [WordCategory; 3] = [
        WordCategory::Adjective,
        WordCategory::Noun,
        WordCategory::Verb,
    ];
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordCategory::Adjective => "adjective",
            WordCategory::Noun => "noun",
            WordCategory::Verb => "verb",
        };
        write!(f, "{name}")
    }
}

/// The semantic field of a synset.
///
/// Classes partition each category into broad semantic areas. Most classes
/// are specific to one category; a few (e.g. [`WordClass::Feeling`]) occur
/// in several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    General,
    Motion,
    Feeling,
    Mind,
    Society,
    Body,
    Quantity,
    NaturalPhenomenon,
    Location,
    Pertainym,
    Perception,
    Privative,
    Relation,
    Substance,
    Behavior,
    Time,
    Artifact,
    Attribute,
    Possession,
    Shape,
    Event,
    Group,
    Cognition,
    Communication,
    Person,
    Motive,
    Food,
    NaturalObject,
    Plant,
    Animal,
    Tops,
    BodyFunction,
    Competition,
    Contact,
    Creation,
    Change,
    Consumption,
}

impl WordClass {
    /// All classes, in a fixed order.
    pub const ALL: [WordClass; 37] = [
        WordClass::General,
        WordClass::Motion,
        WordClass::Feeling,
        WordClass::Mind,
        WordClass::Society,
        WordClass::Body,
        WordClass::Quantity,
        WordClass::NaturalPhenomenon,
        WordClass::Location,
        WordClass::Pertainym,
        WordClass::Perception,
        WordClass::Privative,
        WordClass::Relation,
        WordClass::Substance,
        WordClass::Behavior,
        WordClass::Time,
        WordClass::Artifact,
        WordClass::Attribute,
        WordClass::Possession,
        WordClass::Shape,
        WordClass::Event,
        WordClass::Group,
        WordClass::Cognition,
        WordClass::Communication,
        WordClass::Person,
        WordClass::Motive,
        WordClass::Food,
        WordClass::NaturalObject,
        WordClass::Plant,
        WordClass::Animal,
        WordClass::Tops,
        WordClass::BodyFunction,
        WordClass::Competition,
        WordClass::Contact,
        WordClass::Creation,
        WordClass::Change,
        WordClass::Consumption,
    ];

    /// The categories this class may combine with.
    pub fn categories(&self) -> &'static [WordCategory] {
        use WordCategory::{Adjective, Noun, Verb};

        match self {
            WordClass::Motion
            | WordClass::Mind
            | WordClass::Pertainym
            | WordClass::Privative
            | WordClass::Behavior => &[Adjective],

            WordClass::Artifact
            | WordClass::Attribute
            | WordClass::Shape
            | WordClass::Event
            | WordClass::Group
            | WordClass::Person
            | WordClass::Motive
            | WordClass::Food
            | WordClass::NaturalObject
            | WordClass::Plant
            | WordClass::Animal
            | WordClass::Tops => &[Noun],

            WordClass::BodyFunction
            | WordClass::Competition
            | WordClass::Contact
            | WordClass::Creation
            | WordClass::Change
            | WordClass::Consumption => &[Verb],

            WordClass::General | WordClass::Society | WordClass::Perception => &[Adjective, Verb],

            WordClass::Quantity | WordClass::Relation | WordClass::Substance | WordClass::Time => {
                &[Adjective, Noun]
            }

            WordClass::Possession | WordClass::Cognition | WordClass::Communication => {
                &[Noun, Verb]
            }

            WordClass::Feeling
            | WordClass::Body
            | WordClass::NaturalPhenomenon
            | WordClass::Location => &[Adjective, Noun, Verb],
        }
    }

    /// Whether this class is valid for the given category.
    pub fn is_valid_for(&self, category: WordCategory) -> bool {
        self.categories().contains(&category)
    }
}
