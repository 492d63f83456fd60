pub mod ad_placeholder;
pub mod auth_modal;
pub mod final_gate_modal;
pub mod history_panel;
pub mod lotto_ball;
pub mod pillar_box;
pub mod reward_modal;

pub use ad_placeholder::{AdPlaceholder, AdPosition};
pub use auth_modal::AuthModal;
pub use final_gate_modal::FinalGateModal;
pub use history_panel::HistoryPanel;
pub use lotto_ball::{LottoBall, ball_color_class};
pub use pillar_box::PillarBox;
pub use reward_modal::RewardModal;
