// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod chart;
pub mod detail_list;
pub mod filter_bar;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod progress;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod avatar;
pub mod dialog;
pub mod switch;
pub mod toast;

// Layout
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use chart::*;
pub use detail_list::*;
pub use dialog::*;
pub use filter_bar::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use sidebar::*;
pub use skeleton::*;
pub use switch::*;
pub use textarea::*;
pub use toast::*;
