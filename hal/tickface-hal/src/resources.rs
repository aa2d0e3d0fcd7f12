//! Bitmap resource abstractions
//!
//! Bitmaps are decoded and owned by the platform. The face asks for one by
//! resource id, receives an opaque handle, and must hand the handle back
//! exactly once when it is no longer displayed.

/// Platform resource identifier (one per packaged image)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResourceId(pub u16);

/// Opaque handle to a loaded bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitmapHandle(pub u32);

/// Errors from resource loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceError {
    /// No resource with this id is packaged
    NotFound,
    /// Not enough memory to decode the bitmap
    OutOfMemory,
}

/// Bitmap loader provided by the platform
pub trait ResourceLoader {
    /// Decode a packaged bitmap
    fn load_bitmap(&mut self, id: ResourceId) -> Result<BitmapHandle, ResourceError>;

    /// Release a bitmap previously returned by [`Self::load_bitmap`]
    fn release_bitmap(&mut self, handle: BitmapHandle);
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for &mut T {
    fn load_bitmap(&mut self, id: ResourceId) -> Result<BitmapHandle, ResourceError> {
        (**self).load_bitmap(id)
    }

    fn release_bitmap(&mut self, handle: BitmapHandle) {
        (**self).release_bitmap(handle)
    }
}
