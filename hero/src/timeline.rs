//! Animation timeline data for the hero.
//!
//! Three independent motions live here:
//!
//! - **Entrances** ([`ENTRANCE_TIMELINE`]): one entry per gated block, each a
//!   pre pose plus duration and delay. Nothing moves until the visibility
//!   latch fires; then every block settles with a staggered delay.
//! - **Float loop** ([`FLOAT_LOOP`]): the illustration bobs forever from
//!   mount, regardless of visibility.
//! - **Pointer scale** ([`PointerState`]): CTA wrappers scale on hover and
//!   press, driven by a spring approximated as a CSS transition.
//!
//! Everything renders to inline CSS so the same data drives the SSR page and
//! the hydrated component.

use std::fmt::Write as _;

/// Easing used by every entrance.
pub const ENTRANCE_EASING: &str = "ease-out";

/// Hero blocks gated by the visibility latch, in visual order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Block {
    /// Badge pill
    Badge,
    /// First half of the headline
    Title,
    /// Highlighted second half of the headline
    TitleHighlight,
    /// Paragraph under the headline
    Subtitle,
    /// Feature pill row
    Features,
    /// CTA button row
    Ctas,
    /// "Trusted by" strip
    TrustedBy,
}

impl Block {
    /// All gated blocks, top to bottom.
    pub const ALL: [Block; 7] = [
        Block::Badge,
        Block::Title,
        Block::TitleHighlight,
        Block::Subtitle,
        Block::Features,
        Block::Ctas,
        Block::TrustedBy,
    ];

    /// Value of the `data-entrance` hook.
    pub fn name(self) -> &'static str {
        match self {
            Block::Badge => "badge",
            Block::Title => "title",
            Block::TitleHighlight => "title-highlight",
            Block::Subtitle => "subtitle",
            Block::Features => "features",
            Block::Ctas => "ctas",
            Block::TrustedBy => "trusted-by",
        }
    }
}

/// Opacity plus 2D offset in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// 0.0 (hidden) to 1.0 (opaque)
    pub opacity: f32,
    /// Horizontal offset in px
    pub x: f32,
    /// Vertical offset in px
    pub y: f32,
}

impl Pose {
    /// Where every entrance ends.
    pub const SETTLED: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
    };

    const fn hidden(x: f32, y: f32) -> Pose {
        Pose { opacity: 0.0, x, y }
    }

    /// Inline CSS for this pose.
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px);",
            self.opacity, self.x, self.y
        )
    }
}

/// Entrance of one block: from `pre` to [`Pose::SETTLED`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    /// Block this entry animates
    pub block: Block,
    /// Pose before the latch fires
    pub pre: Pose,
    /// Seconds
    pub duration: f32,
    /// Seconds after the latch fires
    pub delay: f32,
}

impl Entrance {
    /// Pose for the current latch state.
    pub fn pose(&self, visible: bool) -> Pose {
        if visible { Pose::SETTLED } else { self.pre }
    }

    /// CSS `transition` value covering opacity and transform.
    pub fn transition(&self) -> String {
        format!(
            "opacity {d}s {e} {w}s, transform {d}s {e} {w}s",
            d = self.duration,
            e = ENTRANCE_EASING,
            w = self.delay
        )
    }

    /// Complete inline style: pose plus transition.
    pub fn style(&self, visible: bool) -> String {
        format!("{} transition: {};", self.pose(visible).css(), self.transition())
    }
}

/// Staggered reveal, indexed by [`Block`] discriminant.
pub const ENTRANCE_TIMELINE: [Entrance; 7] = [
    Entrance {
        block: Block::Badge,
        pre: Pose::hidden(0.0, -20.0),
        duration: 0.6,
        delay: 0.0,
    },
    Entrance {
        block: Block::Title,
        pre: Pose::hidden(-50.0, 0.0),
        duration: 0.8,
        delay: 0.2,
    },
    Entrance {
        block: Block::TitleHighlight,
        pre: Pose::hidden(-50.0, 0.0),
        duration: 0.8,
        delay: 0.4,
    },
    Entrance {
        block: Block::Subtitle,
        pre: Pose::hidden(0.0, 20.0),
        duration: 0.6,
        delay: 0.6,
    },
    Entrance {
        block: Block::Features,
        pre: Pose::hidden(0.0, 20.0),
        duration: 0.6,
        delay: 0.8,
    },
    Entrance {
        block: Block::Ctas,
        pre: Pose::hidden(0.0, 20.0),
        duration: 0.6,
        delay: 1.0,
    },
    Entrance {
        block: Block::TrustedBy,
        pre: Pose::hidden(0.0, 20.0),
        duration: 0.6,
        delay: 1.2,
    },
];

/// Timeline entry for `block`.
pub fn entrance(block: Block) -> &'static Entrance {
    &ENTRANCE_TIMELINE[block as usize]
}

/// Infinite keyframe loop, independent of visibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatLoop {
    /// `@keyframes` name
    pub name: &'static str,
    /// Seconds per cycle
    pub duration: f32,
    /// Vertical keyframes in px, evenly spaced over the cycle
    pub y: &'static [f32],
    /// Rotation keyframes in degrees, evenly spaced over the cycle
    pub rotate: &'static [f32],
}

/// Bob-and-tilt loop on the floating illustration.
pub const FLOAT_LOOP: FloatLoop = FloatLoop {
    name: "hero-float",
    duration: 6.0,
    y: &[0.0, -10.0, 0.0],
    rotate: &[0.0, 1.0, 0.0, -1.0, 0.0],
};

/// Linear interpolation over evenly spaced keyframes, `t` in 0..=1.
fn sample(track: &[f32], t: f32) -> f32 {
    match track.len() {
        0 => 0.0,
        1 => track[0],
        len => {
            let pos = t.clamp(0.0, 1.0) * (len - 1) as f32;
            let i = (pos.floor() as usize).min(len - 2);
            let frac = pos - i as f32;
            track[i] + (track[i + 1] - track[i]) * frac
        }
    }
}

impl FloatLoop {
    /// Union of both tracks' keyframe offsets, ascending.
    pub fn offsets(&self) -> Vec<f32> {
        let mut offsets: Vec<f32> = [self.y, self.rotate]
            .iter()
            .filter(|track| track.len() > 1)
            .flat_map(|track| {
                let last = (track.len() - 1) as f32;
                (0..track.len()).map(move |k| k as f32 / last)
            })
            .collect();
        offsets.sort_by(f32::total_cmp);
        offsets.dedup_by(|a, b| (*a - *b).abs() < 1e-4);
        offsets
    }

    /// CSS `@keyframes` rule for the loop.
    pub fn keyframes(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);
        for t in self.offsets() {
            let _ = writeln!(
                css,
                "  {}% {{ transform: translateY({}px) rotate({}deg); }}",
                (t * 100.0).round() as u32,
                sample(self.y, t),
                sample(self.rotate, t)
            );
        }
        css.push('}');
        css
    }

    /// Inline style that starts the loop.
    pub fn style(&self) -> String {
        format!(
            "animation: {} {}s ease-in-out infinite;",
            self.name, self.duration
        )
    }
}

/// Scale on hover.
pub const HOVER_SCALE: f32 = 1.05;
/// Scale while pressed.
pub const PRESS_SCALE: f32 = 0.95;

/// Damped spring, unit mass by default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    /// Spring constant
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
    /// Mass
    pub mass: f32,
}

/// Spring driving the CTA scale.
pub const CTA_SPRING: Spring = Spring {
    stiffness: 400.0,
    damping: 17.0,
    mass: 1.0,
};

impl Spring {
    /// Below 1.0 the spring overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Time for the envelope to decay to ~2% (four time constants).
    pub fn settle_seconds(&self) -> f32 {
        8.0 * self.mass / self.damping
    }

    /// CSS timing function approximating the spring.
    pub fn easing(&self) -> &'static str {
        if self.damping_ratio() < 1.0 {
            "cubic-bezier(0.34, 1.56, 0.64, 1)"
        } else {
            "ease-out"
        }
    }

    /// CSS `transition` value for a transform driven by this spring.
    pub fn transition(&self) -> String {
        format!("transform {:.2}s {}", self.settle_seconds(), self.easing())
    }
}

/// Pointer interaction with a CTA.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerState {
    /// Pointer elsewhere
    #[default]
    Idle,
    /// Pointer over the button
    Hover,
    /// Pointer down on the button
    Pressed,
}

/// Pointer events a CTA reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerInput {
    /// `pointerenter`
    Enter,
    /// `pointerleave`
    Leave,
    /// `pointerdown`
    Down,
    /// `pointerup`
    Up,
}

impl PointerState {
    /// State after `input`.
    pub fn next(self, input: PointerInput) -> PointerState {
        match input {
            PointerInput::Enter | PointerInput::Up => PointerState::Hover,
            PointerInput::Leave => PointerState::Idle,
            PointerInput::Down => PointerState::Pressed,
        }
    }

    /// Scale factor for this state.
    pub fn scale(self) -> f32 {
        match self {
            PointerState::Idle => 1.0,
            PointerState::Hover => HOVER_SCALE,
            PointerState::Pressed => PRESS_SCALE,
        }
    }

    /// Inline style for the CTA wrapper.
    pub fn style(self) -> String {
        format!(
            "transform: scale({}); transition: {};",
            self.scale(),
            CTA_SPRING.transition()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn timeline_is_indexed_by_block() {
        for block in Block::ALL {
            assert_eq!(entrance(block).block, block);
        }
    }

    #[test]
    fn delays_cascade_top_to_bottom() {
        let delays: Vec<f32> = Block::ALL.iter().map(|b| entrance(*b).delay).collect();
        for pair in delays.windows(2) {
            assert!(pair[1] > pair[0], "delays must increase: {:?}", delays);
            assert!((pair[1] - pair[0] - 0.2).abs() < 1e-4);
        }
        assert_eq!(delays[0], 0.0);
    }

    #[test]
    fn pre_poses_are_hidden_and_offset() {
        for entry in &ENTRANCE_TIMELINE {
            assert_eq!(entry.pre.opacity, 0.0);
            assert!(entry.pre.x != 0.0 || entry.pre.y != 0.0, "{:?}", entry.block);
        }
        assert_eq!(entrance(Block::Badge).pre.y, -20.0);
        assert_eq!(entrance(Block::Title).pre.x, -50.0);
        assert_eq!(entrance(Block::Subtitle).pre.y, 20.0);
    }

    #[test]
    fn pose_follows_visibility() {
        let title = entrance(Block::Title);
        assert_eq!(title.pose(false), title.pre);
        assert_eq!(title.pose(true), Pose::SETTLED);
    }

    #[test]
    fn style_before_and_after_reveal() {
        let badge = entrance(Block::Badge);
        assert_eq!(
            badge.style(false),
            "opacity: 0; transform: translate(0px, -20px); \
             transition: opacity 0.6s ease-out 0s, transform 0.6s ease-out 0s;"
        );
        assert_eq!(
            entrance(Block::TitleHighlight).style(true),
            "opacity: 1; transform: translate(0px, 0px); \
             transition: opacity 0.8s ease-out 0.4s, transform 0.8s ease-out 0.4s;"
        );
    }

    #[test]
    fn float_offsets_merge_both_tracks() {
        assert_eq!(FLOAT_LOOP.offsets(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn float_keyframes_interpolate_vertical_track() {
        let css = FLOAT_LOOP.keyframes();
        assert!(css.starts_with("@keyframes hero-float {"));
        assert!(css.contains("0% { transform: translateY(0px) rotate(0deg); }"));
        assert!(css.contains("25% { transform: translateY(-5px) rotate(1deg); }"));
        assert!(css.contains("50% { transform: translateY(-10px) rotate(0deg); }"));
        assert!(css.contains("75% { transform: translateY(-5px) rotate(-1deg); }"));
        assert!(css.contains("100% { transform: translateY(0px) rotate(0deg); }"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn float_style_runs_forever() {
        assert_eq!(
            FLOAT_LOOP.style(),
            "animation: hero-float 6s ease-in-out infinite;"
        );
    }

    #[test]
    fn sample_handles_short_tracks() {
        assert_eq!(sample(&[], 0.5), 0.0);
        assert_eq!(sample(&[3.0], 0.9), 3.0);
        assert_eq!(sample(&[0.0, 10.0], 2.0), 10.0);
    }

    #[test]
    fn cta_spring_is_underdamped() {
        assert!(CTA_SPRING.damping_ratio() < 1.0);
        assert!((CTA_SPRING.settle_seconds() - 0.47).abs() < 0.01);
        assert_eq!(
            CTA_SPRING.transition(),
            "transform 0.47s cubic-bezier(0.34, 1.56, 0.64, 1)"
        );
    }

    #[test]
    fn pointer_transitions() {
        let hovered = PointerState::Idle.next(PointerInput::Enter);
        assert_eq!(hovered, PointerState::Hover);
        let pressed = hovered.next(PointerInput::Down);
        assert_eq!(pressed, PointerState::Pressed);
        assert_eq!(pressed.next(PointerInput::Up), PointerState::Hover);
        assert_eq!(pressed.next(PointerInput::Leave), PointerState::Idle);
    }

    #[test]
    fn pointer_scale() {
        assert_eq!(PointerState::Idle.scale(), 1.0);
        assert_eq!(PointerState::Hover.scale(), 1.05);
        assert_eq!(PointerState::Pressed.scale(), 0.95);
        assert!(PointerState::Hover.style().starts_with("transform: scale(1.05);"));
    }
}
