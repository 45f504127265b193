mod avatar;
mod button;
mod card;

pub use avatar::Avatar;
pub use button::Button;
pub use card::Card;
