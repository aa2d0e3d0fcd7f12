//! Runtime errors

use tickface_display::CanvasError;
use tickface_hal::ResourceError;

/// Errors surfaced to the host by the face runtime
///
/// None of these stop the face; the host may retry the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError {
    /// `start` called after the face was already started or torn down
    NotCreated,
    /// Drawing failed; the frame was abandoned and stays dirty
    Canvas(CanvasError),
    /// A bitmap could not be loaded
    Resource(ResourceError),
}

impl From<CanvasError> for FaceError {
    fn from(e: CanvasError) -> Self {
        FaceError::Canvas(e)
    }
}

impl From<ResourceError> for FaceError {
    fn from(e: ResourceError) -> Self {
        FaceError::Resource(e)
    }
}
