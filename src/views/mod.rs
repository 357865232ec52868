pub mod about;
pub mod contact;
pub mod dna;
pub mod faqs;
pub mod home;
pub mod nav;
pub mod poll;
