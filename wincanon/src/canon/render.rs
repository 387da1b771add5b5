//! Canonical string rendering.
//!
//! Turns a resolved root-plus-segments pair back into text using the
//! target family's separator and drive style. Output from this stage
//! re-canonicalizes to itself for the same context.

use crate::canon::lexer::Root;
use crate::context::EnvironmentContext;
use crate::mount::DriveStyle;

/// Render a resolved path for the context's family.
pub(crate) fn render(root: Root, segments: &[String], ctx: &EnvironmentContext) -> String {
    let sep = ctx.family().separator();
    match root {
        Root::Drive(letter) => match ctx.mounts().style_for(ctx.family()) {
            DriveStyle::Letter => {
                let mut out = format!("{letter}:{sep}");
                out.push_str(&join(segments, sep));
                out
            }
            DriveStyle::Mounted { prefix } => {
                let mount = letter.to_ascii_lowercase();
                let mut out = if prefix.is_empty() {
                    format!("/{mount}")
                } else {
                    format!("/{prefix}/{mount}")
                };
                for segment in segments {
                    out.push('/');
                    out.push_str(segment);
                }
                out
            }
        },
        Root::Rooted => format!("{sep}{}", join(segments, sep)),
        Root::Relative => {
            if segments.is_empty() {
                ".".to_string()
            } else {
                join(segments, sep)
            }
        }
    }
}

fn join(segments: &[String], sep: char) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        out.push_str(segment);
    }
    out
}
