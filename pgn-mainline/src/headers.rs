use nom::bytes::complete::{is_not, take_till};
use nom::character::complete::{char, multispace1};
use nom::combinator::all_consuming;
use nom::sequence::{delimited, separated_pair};
use nom::IResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Tag pairs of one game's header block, in insertion order with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    tags: Vec<Tag>,
}

impl Headers {
    /// Inserting an existing key overwrites its value in place.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.tags.iter_mut().find(|tag| tag.key == key) {
            Some(tag) => tag.value = value.to_string(),
            None => self.tags.push(Tag {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }
}

fn tag_pair(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(delimited(
        char('['),
        separated_pair(
            is_not(" \t\"]"),
            multispace1,
            delimited(char('"'), take_till(|c| c == '"'), char('"')),
        ),
        char(']'),
    ))(input)
}

/// Parses one trimmed line as a `[Tag "Value"]` pair. Lines that do not
/// match the pattern belong to the move text and are handed back unparsed.
pub(crate) fn parse_tag_line(line: &str) -> Option<(&str, &str)> {
    tag_pair(line).ok().map(|(_, pair)| pair)
}
