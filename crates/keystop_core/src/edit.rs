//! Editing operations
//!
//! Each edit consumes a gradient and returns the next one, so a caller never
//! observes a half-applied change.

use tracing::trace;

use crate::color::Rgb;
use crate::error::Result;
use crate::gradient::{check_size, Axis, Gradient};
use crate::interpolate::interpolate;
use crate::stop::{check_unit, Stop};

/// A single logical edit from the editor
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edit {
    /// Insert a color stop. `None` takes the color currently shown at
    /// `position`.
    AddColorStop { position: f32, color: Option<Rgb> },
    /// Insert an alpha stop. `None` takes the opacity currently shown at
    /// `position`.
    AddAlphaStop { position: f32, opacity: Option<f32> },
    RemoveColorStop(usize),
    RemoveAlphaStop(usize),
    MoveColorStop { index: usize, position: f32 },
    MoveAlphaStop { index: usize, position: f32 },
    SetColor { index: usize, color: Rgb },
    SetOpacity { index: usize, opacity: f32 },
    Resize { width: u32, height: u32 },
    SetAxis(Axis),
    ToggleAxis,
}

impl Gradient {
    /// Apply an edit, producing the next gradient
    pub fn apply(mut self, edit: Edit) -> Result<Gradient> {
        trace!(?edit, "applying edit");
        match edit {
            Edit::AddColorStop { position, color } => {
                let color = match color {
                    Some(color) => color,
                    None => interpolate(&self.color, position)?,
                };
                self.color.push(Stop::new(position, color));
            }
            Edit::AddAlphaStop { position, opacity } => {
                let opacity = match opacity {
                    Some(opacity) => {
                        check_unit("opacity", opacity)?;
                        opacity
                    }
                    None => interpolate(&self.alpha, position)?,
                };
                self.alpha.push(Stop::new(position, opacity));
            }
            Edit::RemoveColorStop(index) => {
                self.color.remove(index)?;
            }
            Edit::RemoveAlphaStop(index) => {
                self.alpha.remove(index)?;
            }
            Edit::MoveColorStop { index, position } => {
                self.color.set_position(index, position)?;
            }
            Edit::MoveAlphaStop { index, position } => {
                self.alpha.set_position(index, position)?;
            }
            Edit::SetColor { index, color } => {
                self.color.set_value(index, color)?;
            }
            Edit::SetOpacity { index, opacity } => {
                check_unit("opacity", opacity)?;
                self.alpha.set_value(index, opacity)?;
            }
            Edit::Resize { width, height } => {
                check_size(width, height)?;
                self.width = width;
                self.height = height;
            }
            Edit::SetAxis(axis) => self.axis = axis,
            Edit::ToggleAxis => self.axis = self.axis.toggled(),
        }
        Ok(self)
    }
}
