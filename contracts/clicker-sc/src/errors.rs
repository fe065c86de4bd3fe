use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Errors {
    AdminMissing = 1,
    GamePaused = 2,
    GameNotPaused = 3,
    InvalidClickCount = 4,
    ClickOverflow = 5,
    TokenMissing = 6,
    NotTokenOwner = 7,
}
