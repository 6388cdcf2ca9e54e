//! Offscreen frame readback
//!
//! `CapturedFrame` is the CPU-side copy of a rendered target: tightly packed
//! RGBA8 rows plus the accessors tests and the preview tool poke at. Buffer
//! copies out of a texture must pad each row to the wgpu alignment, so
//! construction strips that padding.

const BYTES_PER_PIXEL: u32 = 4;

/// Row stride a texture-to-buffer copy must use for the given width.
pub fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * BYTES_PER_PIXEL;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// Raw captured framebuffer data.
#[derive(Clone, Debug)]
pub struct CapturedFrame {
    /// Raw pixel data (RGBA8)
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Frame number (if capturing a sequence)
    pub frame_number: u64,
}

impl CapturedFrame {
    /// Create a new captured frame.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            frame_number: 0,
        }
    }

    /// Create with frame number.
    pub fn with_frame_number(mut self, frame: u64) -> Self {
        self.frame_number = frame;
        self
    }

    /// Strip per-row copy padding out of a mapped readback buffer.
    pub fn from_padded(width: u32, height: u32, padded: &[u8]) -> Self {
        let stride = padded_bytes_per_row(width) as usize;
        let row_bytes = (width * BYTES_PER_PIXEL) as usize;
        let mut data = Vec::with_capacity(row_bytes * height as usize);
        for row in 0..height as usize {
            let start = row * stride;
            data.extend_from_slice(&padded[start..start + row_bytes]);
        }
        Self::new(data, width, height)
    }

    /// Get the number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Get expected data length for RGBA8.
    pub fn expected_size(&self) -> usize {
        self.pixel_count() * 4
    }

    /// Get a pixel at (x, y) as RGBA.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 4 > self.data.len() {
            return None;
        }
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    pub fn center_pixel(&self) -> Option<[u8; 4]> {
        self.get_pixel(self.width / 2, self.height / 2)
    }

    /// Average of the RGB channels over the whole frame, in `0.0..=1.0`.
    pub fn mean_brightness(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let sum: u64 = self
            .data
            .chunks_exact(4)
            .map(|px| px[0] as u64 + px[1] as u64 + px[2] as u64)
            .sum();
        let samples = (self.pixel_count() * 3) as f32;
        sum as f32 / samples / 255.0
    }

    /// Compare with another frame, returning the number of different pixels.
    pub fn diff_pixel_count(&self, other: &CapturedFrame) -> usize {
        if self.width != other.width || self.height != other.height {
            return self.pixel_count().max(other.pixel_count());
        }

        self.data
            .chunks(4)
            .zip(other.data.chunks(4))
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Check if two frames are identical.
    pub fn is_identical_to(&self, other: &CapturedFrame) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }

    /// Calculate the percentage of pixels that differ.
    pub fn diff_percentage(&self, other: &CapturedFrame) -> f32 {
        let total = self.pixel_count().max(1) as f32;
        let diff = self.diff_pixel_count(other) as f32;
        (diff / total) * 100.0
    }
}
