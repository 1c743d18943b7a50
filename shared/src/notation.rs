//! Parsing of face-turn notation strings such as `"F B U' R2"`.
//!
//! A token is a face letter optionally followed by `'` or `2`, both meaning
//! the counter-clockwise quarter turn.
use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::rotation::{Face, RotationId};

/// Error produced by strict notation parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Token is not a face letter with an optional `'` or `2` suffix
    #[error("unrecognized token {token:?} at position {index}")]
    UnknownToken { token: String, index: usize },
}

/// Parses a single token.
fn parse_token(token: &str) -> Option<RotationId> {
    let mut chars = token.chars();
    let face = Face::from_letter(chars.next()?)?;
    let clockwise = match chars.as_str() {
        "" => true,
        "'" | "2" => false,
        _ => return None,
    };
    Some(RotationId::from_face(face, clockwise))
}

/// Parses a whitespace-separated sequence of tokens, skipping any that are not recognized.
pub fn parse(notation: &str) -> Vec<RotationId> {
    notation
        .split_whitespace()
        .filter_map(|token| {
            let rotation = parse_token(token);
            if rotation.is_none() {
                warn!("Ignoring unrecognized rotation {token:?}");
            }
            rotation
        })
        .collect()
}

/// Parses a whitespace-separated sequence of tokens, failing on the first unrecognized one.
pub fn parse_strict(notation: &str) -> Result<Vec<RotationId>, NotationError> {
    notation
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            parse_token(token).ok_or_else(|| NotationError::UnknownToken {
                token: token.to_owned(),
                index,
            })
        })
        .collect()
}

/// Lenient parse, optionally turned into its undo sequence (see [`reversed`]).
pub fn parse_sequence(notation: &str, reverse: bool) -> Vec<RotationId> {
    let rotations = parse(notation);
    if reverse {
        reversed(&rotations)
    } else {
        rotations
    }
}

/// Sequence that undoes `rotations`: reversed order, every turn inverted.
pub fn reversed(rotations: &[RotationId]) -> Vec<RotationId> {
    rotations.iter().rev().map(|r| r.invert()).collect()
}

/// Space-separated canonical notation for a sequence.
pub fn to_notation(rotations: &[RotationId]) -> String {
    rotations
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl FromStr for RotationId {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(s).ok_or_else(|| NotationError::UnknownToken {
            token: s.to_owned(),
            index: 0,
        })
    }
}
