pub mod hit;
pub mod paint;
pub mod recording;
pub mod scene;

pub use hit::{hit_test, occupant_at, seats_at, seats_in_area};
pub use paint::{FrameOverlay, paint_label, paint_layout, paint_overlay, paint_selection_frame};
pub use recording::{DrawCall, RecordingRenderer};
pub use scene::SceneRenderer;
