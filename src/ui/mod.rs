pub mod mvi;
