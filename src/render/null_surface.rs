use crate::error::WidgetResult;
use crate::render::{Surface, WidgetFrame};

/// No-op surface used by tests and headless embedding.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real host surface is introduced.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub applied_frames: usize,
    pub last_frame: Option<WidgetFrame>,
}

impl Surface for NullSurface {
    fn apply(&mut self, frame: &WidgetFrame) -> WidgetResult<()> {
        frame.validate()?;
        self.applied_frames += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
