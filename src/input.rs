use crate::error::InputError;
use crate::skyline::{Building, Coord};
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parses a building list: a count `N` followed by `N` triples of
/// `left height right`, all whitespace separated. Building `i` gets id `i`.
///
/// Anything after the last triple is ignored.
pub fn parse_buildings(text: &str) -> Result<Vec<Building>, InputError> {
    let mut tokens = text.split_whitespace().enumerate().map(|(i, token)| {
        token.parse::<Coord>().map_err(|_| InputError::InvalidToken {
            position: i + 1,
            token: token.to_string(),
        })
    });

    let count = tokens.next().ok_or(InputError::MissingCount)??;
    let count = usize::try_from(count).map_err(|_| InputError::NegativeCount(count))?;

    let mut buildings = Vec::new();
    for id in 0..count {
        let mut triple: [Coord; 3] = [0; 3];
        for slot in triple.iter_mut() {
            *slot = match tokens.next() {
                Some(value) => value?,
                None => {
                    return Err(InputError::Truncated {
                        expected: count,
                        found: id,
                    })
                }
            };
        }

        let [left, height, right] = triple;
        if left >= right {
            return Err(InputError::EmptyWidth { id, left, right });
        }
        if height < 0 {
            return Err(InputError::NegativeHeight { id, height });
        }
        buildings.push(Building::new(left, height, right, id));
    }

    let extra = tokens.count();
    if extra > 0 {
        warn!("ignoring {} tokens after the last building", extra);
    }
    debug!("parsed {} buildings", buildings.len());
    Ok(buildings)
}

pub fn read_buildings<R: Read>(mut reader: R) -> Result<Vec<Building>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_buildings(&text)
}

pub fn load_buildings<P: AsRef<Path>>(path: P) -> Result<Vec<Building>, InputError> {
    let path = path.as_ref();
    debug!("reading buildings from {}", path.display());
    read_buildings(File::open(path)?)
}
