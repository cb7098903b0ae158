//! Sprite sheet metadata parsing.
//!
//! Every image loaded as a sheet has a companion text file with the same
//! base name and a `.txt` extension. Each line is one tab-separated record,
//! classified by its number of fields:
//!
//! ```text
//! Sprite                      name  width   height  x       y
//! Additional animation frame  name  frame   width   height  x  y
//! First animation frame       name  frame   width   height  x  y  type  delay
//! ```
//!
//! The frame number column is informational; frames are ordered by line.
//! `type` is the integer code of an [`AnimationType`] and `delay` the number
//! of seconds each frame is shown.

use crate::error::{AssetError, AssetResult};
use crate::resources::animationstore::{AnimationType, FrameSpec};

const SPRITE_FIELDS: usize = 5;
const FRAME_FIELDS: usize = 6;
const FIRST_FRAME_FIELDS: usize = 8;

/// One classified metadata line.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataRecord {
    Sprite {
        name: String,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
    },
    /// First frame of an animation; carries the playback parameters.
    FirstFrame {
        name: String,
        frame_number: i32,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
        animation_type: AnimationType,
        frame_delay: f32,
    },
    /// Any later frame. Only `x` and `y` end up in the animation.
    Frame {
        name: String,
        frame_number: i32,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
    },
    /// Empty or whitespace-only line.
    Blank,
}

impl MetadataRecord {
    /// Name of the sprite or animation the record belongs to.
    pub fn name(&self) -> Option<&str> {
        match self {
            MetadataRecord::Sprite { name, .. }
            | MetadataRecord::FirstFrame { name, .. }
            | MetadataRecord::Frame { name, .. } => Some(name),
            MetadataRecord::Blank => None,
        }
    }

    /// Accumulator input for animation records.
    pub fn frame_spec(&self) -> Option<FrameSpec> {
        match *self {
            MetadataRecord::FirstFrame {
                width,
                height,
                x,
                y,
                animation_type,
                frame_delay,
                ..
            } => Some(
                FrameSpec::new(width, height, x, y).with_playback(animation_type, frame_delay),
            ),
            MetadataRecord::Frame {
                width, height, x, y, ..
            } => Some(FrameSpec::new(width, height, x, y)),
            _ => None,
        }
    }
}

/// Strip one trailing line terminator (`\n`, `\r\n` or a lone `\r`).
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split a line into its non-empty, whitespace-trimmed tab-separated fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    trim_line_ending(line)
        .split('\t')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// Parse and classify one metadata line.
pub fn parse_line(line: &str) -> AssetResult<MetadataRecord> {
    let fields = split_fields(line);

    match fields.len() {
        0 => Ok(MetadataRecord::Blank),
        SPRITE_FIELDS => {
            let name = fields[0].to_string();
            let width = parse_int(&fields, 1, "width")?;
            let height = parse_int(&fields, 2, "height")?;
            check_size(&name, width, height)?;
            Ok(MetadataRecord::Sprite {
                name,
                width,
                height,
                x: parse_int(&fields, 3, "x")?,
                y: parse_int(&fields, 4, "y")?,
            })
        }
        FRAME_FIELDS => Ok(MetadataRecord::Frame {
            name: fields[0].to_string(),
            frame_number: parse_int(&fields, 1, "frame number")?,
            width: parse_int(&fields, 2, "width")?,
            height: parse_int(&fields, 3, "height")?,
            x: parse_int(&fields, 4, "x")?,
            y: parse_int(&fields, 5, "y")?,
        }),
        FIRST_FRAME_FIELDS => {
            let name = fields[0].to_string();
            let width = parse_int(&fields, 2, "width")?;
            let height = parse_int(&fields, 3, "height")?;
            check_size(&name, width, height)?;
            let animation_type = AnimationType::try_from(parse_int(&fields, 6, "animation type")?)?;
            let frame_delay: f32 = fields[7].parse().map_err(|_| {
                AssetError::malformed(format!("frame delay '{}' is not a number", fields[7]))
            })?;
            if !frame_delay.is_finite() || frame_delay < 0.0 {
                return Err(AssetError::malformed(format!(
                    "frame delay {frame_delay} must be a non-negative number"
                )));
            }
            Ok(MetadataRecord::FirstFrame {
                name,
                frame_number: parse_int(&fields, 1, "frame number")?,
                width,
                height,
                x: parse_int(&fields, 4, "x")?,
                y: parse_int(&fields, 5, "y")?,
                animation_type,
                frame_delay,
            })
        }
        n => Err(AssetError::malformed(format!(
            "expected {SPRITE_FIELDS}, {FRAME_FIELDS} or {FIRST_FRAME_FIELDS} fields, found {n}"
        ))),
    }
}

fn parse_int(fields: &[&str], index: usize, what: &str) -> AssetResult<i32> {
    fields[index].parse().map_err(|_| {
        AssetError::malformed(format!("{what} '{}' is not an integer", fields[index]))
    })
}

fn check_size(name: &str, width: i32, height: i32) -> AssetResult<()> {
    if width <= 0 || height <= 0 {
        return Err(AssetError::malformed(format!(
            "'{name}' has non-positive size {width}x{height}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_record() {
        let record = parse_line("CloudBox\t392\t294\t0\t8").unwrap();
        assert_eq!(
            record,
            MetadataRecord::Sprite {
                name: "CloudBox".to_string(),
                width: 392,
                height: 294,
                x: 0,
                y: 8,
            }
        );
        assert_eq!(record.name(), Some("CloudBox"));
        assert!(record.frame_spec().is_none());
    }

    #[test]
    fn test_first_frame_record() {
        let record = parse_line("Foo\t3\t10\t20\t0\t0\t2\t0.15").unwrap();
        assert_eq!(
            record,
            MetadataRecord::FirstFrame {
                name: "Foo".to_string(),
                frame_number: 3,
                width: 10,
                height: 20,
                x: 0,
                y: 0,
                animation_type: AnimationType::PingPong,
                frame_delay: 0.15,
            }
        );
        let spec = record.frame_spec().unwrap();
        assert_eq!(spec.animation_type, AnimationType::PingPong);
        assert_eq!(spec.frame_delay, 0.15);
    }

    #[test]
    fn test_additional_frame_record() {
        let record = parse_line("Foo\t4\t10\t20\t16\t0").unwrap();
        assert_eq!(
            record,
            MetadataRecord::Frame {
                name: "Foo".to_string(),
                frame_number: 4,
                width: 10,
                height: 20,
                x: 16,
                y: 0,
            }
        );
        let spec = record.frame_spec().unwrap();
        assert_eq!(spec.animation_type, AnimationType::None);
        assert_eq!((spec.x, spec.y), (16, 0));
    }

    #[test]
    fn test_line_endings_are_trimmed_exactly() {
        let unix = parse_line("Arrow\t16\t57\t0\t0\n").unwrap();
        let windows = parse_line("Arrow\t16\t57\t0\t0\r\n").unwrap();
        let bare = parse_line("Arrow\t16\t57\t0\t0").unwrap();
        assert_eq!(unix, bare);
        assert_eq!(windows, bare);
        // the last digit must survive
        assert!(matches!(bare, MetadataRecord::Sprite { y: 0, x: 0, .. }));
        assert!(matches!(
            parse_line("Arrow\t16\t57\t0\t12\r\n").unwrap(),
            MetadataRecord::Sprite { y: 12, .. }
        ));
    }

    #[test]
    fn test_trailing_tab_does_not_change_classification() {
        let record = parse_line("Arrow\t16\t57\t0\t0\t\n").unwrap();
        assert!(matches!(record, MetadataRecord::Sprite { .. }));
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_line("").unwrap(), MetadataRecord::Blank);
        assert_eq!(parse_line("\r\n").unwrap(), MetadataRecord::Blank);
        assert_eq!(parse_line("  \t ").unwrap(), MetadataRecord::Blank);
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        for line in ["Foo", "Foo\t1\t2", "Foo\t1\t2\t3\t4\t5\t6", "a\tb\tc\td\te\tf\tg\th\ti"] {
            let err = parse_line(line).unwrap_err();
            assert!(
                matches!(err, AssetError::MalformedRecord { .. }),
                "line {line:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_non_numeric_fields_are_malformed() {
        assert!(parse_line("Foo\twide\t20\t0\t0").is_err());
        assert!(parse_line("Foo\t1\t10\t20\t0\t0\t2\tfast").is_err());
        assert!(parse_line("Foo\t1\t10\t20\tx\t0").is_err());
    }

    #[test]
    fn test_invalid_sizes_and_types() {
        assert!(parse_line("Foo\t0\t20\t0\t0").is_err());
        assert!(parse_line("Foo\t1\t10\t-1\t0\t0\t1\t0.1").is_err());
        assert!(parse_line("Foo\t1\t10\t20\t0\t0\t9\t0.1").is_err());
        assert!(parse_line("Foo\t1\t10\t20\t0\t0\t1\t-0.5").is_err());
    }

    #[test]
    fn test_additional_frame_size_is_not_validated() {
        // size of later frames is discarded, so it is not checked either
        assert!(parse_line("Foo\t2\t0\t0\t16\t0").is_ok());
    }
}
