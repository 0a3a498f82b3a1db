pub mod favorite;
pub mod listing_card;
pub mod map_preview;
pub mod notice;
pub mod pagination;
pub mod photo_editor;
pub mod search_widget;

pub use favorite::favorite_button;
pub use listing_card::listing_card;
pub use map_preview::map_preview;
pub use notice::{error_notice, notice};
pub use pagination::pagination;
pub use photo_editor::{crop_failed, crop_result, photo_editor};
pub use search_widget::search_widget;
