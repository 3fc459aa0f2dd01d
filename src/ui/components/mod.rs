pub mod shoe_card;
pub mod summary_card;
pub mod variant_badge;

#[allow(unused_imports)]
pub use shoe_card::{render, CardView, ShoeCard};
pub use summary_card::SummaryCard;
#[allow(unused_imports)]
pub use variant_badge::VariantBadge;
