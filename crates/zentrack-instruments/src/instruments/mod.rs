pub mod ham_a;
pub mod zen15;
