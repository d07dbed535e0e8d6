use crate::foundation::core::Point;
use crate::foundation::math::Fixed2;
use crate::path::serialize::{PathStyle, generate_path_string};
use crate::pipeline::session::PipelineOutput;
use crate::timing::AnimationTiming;
use crate::trajectory::keyframes::Keyframe;
use std::fmt;

/// Options for [`render_css`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CssOptions {
    /// `@keyframes` identifier.
    pub name: String,
    /// Selector the animation rule is attached to.
    pub selector: String,
    /// Override for the animation duration; defaults to the gesture's duration.
    pub duration_ms: Option<f64>,
    /// Iteration count; `None` plays once.
    pub iterations: Option<u32>,
    /// Anchor for translations and the motion path; the first sample when `None`.
    pub origin: Option<Point>,
    /// Segment style for `offset-path`.
    pub path_style: PathStyle,
    /// Anchor spacing for curved paths, see [`crate::PipelineConfig::curve_segments`].
    pub curve_segments: usize,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            name: "sketched-motion".to_string(),
            selector: ".sketched".to_string(),
            duration_ms: None,
            iterations: None,
            origin: None,
            path_style: PathStyle::Straight,
            curve_segments: 10,
        }
    }
}

/// Render a stylesheet snippet that replays the gesture.
///
/// Keyframe timing becomes one `translate()` step per keyframe with linear
/// easing in between. Curve timing moves the element along `offset-path` with
/// the estimated `cubic-bezier()` as its timing function.
pub fn render_css(output: &PipelineOutput, opts: &CssOptions) -> String {
    Stylesheet { output, opts }.to_string()
}

struct Stylesheet<'a> {
    output: &'a PipelineOutput,
    opts: &'a CssOptions,
}

impl fmt::Display for Stylesheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = self.opts;
        let duration = opts
            .duration_ms
            .unwrap_or(self.output.total_duration)
            .max(1.0);
        let iterations = opts
            .iterations
            .map_or_else(|| "1".to_string(), |n| n.to_string());

        match &self.output.timing {
            AnimationTiming::Keyframes { keyframes } => {
                write_translate_keyframes(f, &opts.name, keyframes, opts.origin)?;
                write!(
                    f,
                    "{sel} {{\n  animation: {name} {dur}ms linear {iterations} forwards;\n}}\n",
                    sel = opts.selector,
                    name = opts.name,
                    dur = Fixed2(duration),
                )
            }
            AnimationTiming::CubicBezier { curve } => {
                let d = generate_path_string(
                    &self.output.filtered,
                    opts.origin,
                    opts.path_style,
                    opts.curve_segments,
                );
                write!(
                    f,
                    "@keyframes {name} {{\n  from {{ offset-distance: 0%; }}\n  to {{ offset-distance: 100%; }}\n}}\n\
                     {sel} {{\n  offset-path: path('{d}');\n  animation: {name} {dur}ms {curve} {iterations} forwards;\n}}\n",
                    name = opts.name,
                    sel = opts.selector,
                    dur = Fixed2(duration),
                )
            }
        }
    }
}

fn write_translate_keyframes(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    keyframes: &[Keyframe],
    origin: Option<Point>,
) -> fmt::Result {
    let Some(first) = keyframes.first() else {
        return Ok(());
    };
    let origin = origin.unwrap_or_else(|| first.sample.point());

    writeln!(f, "@keyframes {name} {{")?;
    for k in keyframes {
        let delta = k.sample.point() - origin;
        writeln!(
            f,
            "  {}% {{ transform: translate({}px, {}px); }}",
            Fixed2(k.progress * 100.0),
            Fixed2(delta.x),
            Fixed2(delta.y)
        )?;
    }
    writeln!(f, "}}")
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/css.rs"]
mod tests;
