pub mod input_card;
pub mod result_card;

pub use input_card::InputCard;
pub use result_card::ResultCard;
