//! L4 Atomic Layer: frame timing for fade-in and scrolling
//!
//! Pure functions mapping elapsed time and the global scroll speed setting
//! to fade frames and per-frame pixel advances.

/// Frames over which new text fades in
pub const FADE_FRAMES: u32 = 12;

/// Fastest horizontal scroll speed setting
pub const MAX_SCROLL_SPEED: u8 = 6;

/// Speeds below this advance one pixel every few frames
const SLOW_SPEED_LIMIT: u8 = 3;

/// Seconds per fade frame; faster scroll speeds fade faster
#[inline]
pub fn time_slice(speed: u8) -> f64 {
    let speed = speed.min(MAX_SCROLL_SPEED);
    0.01 + (MAX_SCROLL_SPEED - speed) as f64 * 0.01
}

/// Fade frame reached after `elapsed_secs`
#[inline]
pub fn fade_frame(elapsed_secs: f64, speed: u8) -> u32 {
    if elapsed_secs <= 0.0 {
        return 0;
    }
    (elapsed_secs / time_slice(speed)) as u32
}

/// Pixels to advance this frame.
///
/// Speeds 0-2 move one pixel every `4 - speed` paced frames, speeds 3-6
/// move `speed - 2` pixels every frame.
#[inline]
pub fn scroll_advance(speed: u8, frame_limiter: u32) -> i32 {
    let speed = speed.min(MAX_SCROLL_SPEED);
    if speed < SLOW_SPEED_LIMIT {
        let every = (4 - speed) as u32;
        if frame_limiter % every == 0 {
            1
        } else {
            0
        }
    } else {
        speed as i32 - 2
    }
}

/// Step the pacing counter through `1..=max_fps`
#[inline]
pub fn next_frame_limiter(current: u32, max_fps: u32) -> u32 {
    if current < max_fps {
        current + 1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slice() {
        assert!((time_slice(6) - 0.01).abs() < 1e-9);
        assert!((time_slice(0) - 0.07).abs() < 1e-9);
        // out of range speeds clamp to the fastest
        assert!((time_slice(42) - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_fade_frame() {
        assert_eq!(fade_frame(0.0, 4), 0);
        assert_eq!(fade_frame(0.05, 4), 1);
        assert_eq!(fade_frame(1.0, 4), 33);
    }

    #[test]
    fn test_scroll_advance_fast() {
        assert_eq!(scroll_advance(3, 7), 1);
        assert_eq!(scroll_advance(6, 7), 4);
    }

    #[test]
    fn test_scroll_advance_slow() {
        let moved: i32 = (1..=12).map(|f| scroll_advance(0, f)).sum();
        assert_eq!(moved, 3); // every 4th frame

        let moved: i32 = (1..=12).map(|f| scroll_advance(2, f)).sum();
        assert_eq!(moved, 6); // every 2nd frame
    }

    #[test]
    fn test_frame_limiter_wraps() {
        assert_eq!(next_frame_limiter(1, 3), 2);
        assert_eq!(next_frame_limiter(3, 3), 1);
        assert_eq!(next_frame_limiter(1, 0), 1);
    }
}
