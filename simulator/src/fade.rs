//! Hold-to-reset fade state.
//!
//! Holding a reset key fades its number toward black over
//! [`FADE_FRAMES`](crate::timing::FADE_FRAMES) frames. Releasing early cancels
//! the reset; holding to the end zeroes the accumulator.

/// Result of advancing a fade by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadeStep {
    /// Still fading; repaint at this progress (`0.0..1.0`).
    Progress(f32),
    /// Fade finished; reset the accumulator.
    Done,
}

/// Frame-counted fade driven by a held key.
#[derive(Clone, Copy, Debug)]
pub struct HoldFade {
    frames: u32,
    frame: Option<u32>,
}

impl HoldFade {
    pub const fn new(frames: u32) -> Self { Self { frames, frame: None } }

    /// Key pressed: start from full brightness.
    #[inline]
    pub const fn start(&mut self) { self.frame = Some(0); }

    /// Key released before the fade finished.
    #[inline]
    pub const fn cancel(&mut self) { self.frame = None; }

    #[inline]
    pub const fn is_active(&self) -> bool { self.frame.is_some() }

    /// Advance one frame. Returns `None` when no fade is running.
    pub fn advance(&mut self) -> Option<FadeStep> {
        let frame = self.frame.as_mut()?;
        *frame += 1;
        let elapsed = *frame;

        if elapsed >= self.frames {
            self.frame = None;
            Some(FadeStep::Done)
        } else {
            Some(FadeStep::Progress(elapsed as f32 / self.frames as f32))
        }
    }
}
