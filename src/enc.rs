use crate::{LifeError, pos::Pos2};
use regex::Regex;
use std::sync::OnceLock;

fn run_regex() -> &'static Regex {
    static RUN: OnceLock<Regex> = OnceLock::new();
    RUN.get_or_init(|| Regex::new(r"(\d*)([bo$!])").expect("run-length token regex"))
}

/// Decoder for the Life run-length encoded pattern format
///
/// `b` is a dead cell, `o` an alive one, `$` ends a row and `!` ends the
/// pattern. Each tag may be preceded by a run count. Everything after a `#`
/// on a line is a comment, and the `x = .., y = ..` header line is skipped.
///
/// See: https://conwaylife.com/wiki/Run_Length_Encoded
#[derive(Debug, Default)]
pub struct RunLengthEncoded;

impl RunLengthEncoded {
    /// Alive cells of the pattern, relative to its top-left corner, in row-major order
    ///
    /// `room` is the `(width, height)` the pattern has to fit in. An alive run
    /// reaching past it fails with [`LifeError::PatternTooLarge`] before any
    /// of its cells are stored.
    pub fn decode(&self, value: &str, room: (usize, usize)) -> Result<Vec<Pos2>, LifeError> {
        let (room_x, room_y) = room;
        let mut alive = Vec::new();
        let (mut x, mut y) = (0usize, 0usize);
        'lines_loop: for mut line in value.lines() {
            if let Some(i) = line.find('#') {
                line = &line[..i];
            }
            if line.trim_start().starts_with('x') {
                continue;
            }

            let mut last = 0;
            for caps in run_regex().captures_iter(line) {
                let token = caps.get_match();
                check_gap(&line[last..token.start()])?;
                last = token.end();

                let (_, [run_str, state]) = caps.extract();
                let run = run_length(run_str)?;
                match state {
                    "!" => break 'lines_loop,
                    "o" => {
                        let end = x
                            .checked_add(run)
                            .filter(|&end| end <= room_x && y < room_y)
                            .ok_or(LifeError::PatternTooLarge {
                                width: x.saturating_add(run),
                                height: y.saturating_add(1),
                                room_x,
                                room_y,
                            })?;
                        alive.extend((x..end).map(|cx| Pos2::new(cx as i32, y as i32)));
                        x = end;
                    }
                    // a later alive run past the room fails, so these only need to saturate
                    "b" => x = x.saturating_add(run),
                    "$" => {
                        x = 0;
                        y = y.saturating_add(run);
                    }
                    _ => unreachable!("regex only captures b, o, $ and !"),
                }
            }
            check_gap(&line[last..])?;
        }

        Ok(alive)
    }

    /// Whether `value` reads as a run-length pattern rather than a pattern name
    pub fn looks_encoded(value: &str) -> bool {
        value.trim_end().ends_with('!')
    }
}

fn run_length(digits: &str) -> Result<usize, LifeError> {
    if digits.is_empty() {
        return Ok(1);
    }
    digits
        .parse()
        .map_err(|_| LifeError::InvalidPattern(format!("run count {digits} is out of range")))
}

/// Only whitespace may sit between tokens
fn check_gap(gap: &str) -> Result<(), LifeError> {
    match gap.trim().chars().next() {
        None => Ok(()),
        Some(c) => Err(LifeError::InvalidPattern(format!(
            "unexpected {c:?} in {:?}",
            gap.trim()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: (usize, usize) = (64, 64);

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    fn decode(value: &str) -> Result<Vec<Pos2>, LifeError> {
        RunLengthEncoded.decode(value, ROOM)
    }

    #[test]
    fn decodes_glider() {
        let alive = decode("bo$2bo$3o!").unwrap();
        assert_eq!(
            alive,
            vec![pos(1, 0), pos(2, 1), pos(0, 2), pos(1, 2), pos(2, 2)]
        );
    }

    #[test]
    fn skips_header_and_comments() {
        let text = "#N Blinker\n#C a period 2 oscillator\nx = 3, y = 1, rule = b3/s23\n3o!\n";
        assert_eq!(
            decode(text).unwrap(),
            vec![pos(0, 0), pos(1, 0), pos(2, 0)]
        );
    }

    #[test]
    fn row_runs_skip_blank_rows() {
        assert_eq!(decode("o2$o!").unwrap(), vec![pos(0, 0), pos(0, 2)]);
    }

    #[test]
    fn stops_at_terminator() {
        assert_eq!(decode("o!\n5o").unwrap(), vec![pos(0, 0)]);
    }

    #[test]
    fn tells_encoded_from_names() {
        assert!(RunLengthEncoded::looks_encoded("2o$2o!"));
        assert!(!RunLengthEncoded::looks_encoded("glider"));
    }

    #[test]
    fn huge_runs_fail_before_allocating() {
        for value in ["2147483647bo!", "2000000000b2000000000bo!", "1000000000o!"] {
            assert!(
                matches!(decode(value), Err(LifeError::PatternTooLarge { .. })),
                "{value}"
            );
        }
        let err = decode(&format!("{}$o!", usize::MAX)).unwrap_err();
        assert!(matches!(err, LifeError::PatternTooLarge { room_y: 64, .. }));
    }

    #[test]
    fn runs_must_fit_the_room() {
        assert_eq!(RunLengthEncoded.decode("3o!", (3, 1)).unwrap().len(), 3);
        assert!(matches!(
            RunLengthEncoded.decode("4o!", (3, 1)),
            Err(LifeError::PatternTooLarge { width: 4, height: 1, .. })
        ));
        assert!(RunLengthEncoded.decode("o$o!", (3, 1)).is_err());
        // trailing dead cells past the room are harmless
        assert!(RunLengthEncoded.decode("o9b!", (3, 1)).is_ok());
    }

    #[test]
    fn rejects_unknown_tags_and_overlong_counts() {
        assert!(matches!(decode("3z$2k!"), Err(LifeError::InvalidPattern(_))));
        assert!(matches!(decode("bo x!"), Err(LifeError::InvalidPattern(_))));
        assert!(matches!(
            decode("99999999999999999999999o!"),
            Err(LifeError::InvalidPattern(_))
        ));
        // whitespace between tokens is fine
        assert_eq!(decode(" 2o $ o !").unwrap(), vec![pos(0, 0), pos(1, 0), pos(0, 1)]);
    }
}
