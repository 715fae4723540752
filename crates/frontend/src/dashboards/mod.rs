pub mod common;
pub mod d401_hajj_umrah;
pub mod d402_assets_investments;
pub mod d403_air_ticketing;
