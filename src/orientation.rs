use egui::{Vec2, ViewportCommand};

/// Lets the canvas pin and release the screen orientation without owning it.
pub trait OrientationController {
    /// Pin the orientation to whatever it currently is.
    fn lock(&mut self);

    /// Let the orientation follow the device again.
    fn unlock(&mut self);

    fn is_locked(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn of_size(size: Vec2) -> Self {
        if size.y > size.x {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// Window-based orientation control.
///
/// On the desktop, rotating the device corresponds to reshaping the window, so
/// locking keeps the window from being resized until it is unlocked again.
/// The viewport command is queued here and sent by the app on the next frame.
#[derive(Debug, Default)]
pub struct WindowOrientation {
    current: Orientation,
    pinned: Option<Orientation>,
    pending: Option<ViewportCommand>,
}

impl WindowOrientation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the orientation implied by the current window size.
    pub fn observe(&mut self, size: Vec2) {
        self.current = Orientation::of_size(size);
    }

    pub fn current(&self) -> Orientation {
        self.current
    }

    /// The orientation the window is pinned to, if locked.
    pub fn pinned(&self) -> Option<Orientation> {
        self.pinned
    }

    pub fn take_viewport_command(&mut self) -> Option<ViewportCommand> {
        self.pending.take()
    }
}

impl OrientationController for WindowOrientation {
    fn lock(&mut self) {
        log::debug!("Locking orientation to {:?}", self.current);
        self.pinned = Some(self.current);
        self.pending = Some(ViewportCommand::Resizable(false));
    }

    fn unlock(&mut self) {
        log::debug!("Unlocking orientation");
        self.pinned = None;
        self.pending = Some(ViewportCommand::Resizable(true));
    }

    fn is_locked(&self) -> bool {
        self.pinned.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_orientation_of_size() {
        assert_eq!(Orientation::of_size(vec2(400.0, 800.0)), Orientation::Portrait);
        assert_eq!(Orientation::of_size(vec2(800.0, 400.0)), Orientation::Landscape);
    }

    #[test]
    fn test_lock_pins_current_orientation() {
        let mut orientation = WindowOrientation::new();
        orientation.observe(vec2(1000.0, 500.0));
        orientation.lock();

        assert!(orientation.is_locked());
        assert_eq!(orientation.pinned(), Some(Orientation::Landscape));
        assert!(matches!(
            orientation.take_viewport_command(),
            Some(ViewportCommand::Resizable(false))
        ));
        assert!(orientation.take_viewport_command().is_none());
    }

    #[test]
    fn test_unlock_releases_window() {
        let mut orientation = WindowOrientation::new();
        orientation.lock();
        orientation.unlock();

        assert!(!orientation.is_locked());
        assert!(matches!(
            orientation.take_viewport_command(),
            Some(ViewportCommand::Resizable(true))
        ));
    }
}
