use crate::domain::errors::DomainError;
use crate::domain::state::{GameState, Phase};

/// Bonus for meeting the bid exactly.
pub const EXACT_BID_BONUS: i32 = 10;
/// Points per trick when the bid is met, and penalty per trick of error otherwise.
pub const POINTS_PER_TRICK: i32 = 2;

/// Score of one player for one game.
///
/// `10 + 2 × tricks_won` for an exact bid, `-2 × |bid - tricks_won|` otherwise.
pub fn score(bid: i32, tricks_won: i32) -> Result<i32, DomainError> {
    if bid < 0 || tricks_won < 0 {
        return Err(DomainError::invalid_argument(format!(
            "Score inputs must be non-negative (bid {bid}, tricks won {tricks_won})"
        )));
    }
    if bid == tricks_won {
        Ok(EXACT_BID_BONUS + POINTS_PER_TRICK * tricks_won)
    } else {
        Ok(-POINTS_PER_TRICK * (bid - tricks_won).abs())
    }
}

/// Compute final scores for every seat and mark the game complete.
pub(crate) fn apply_final_scores(state: &mut GameState) -> Result<(), DomainError> {
    let bids = state
        .bids
        .as_ref()
        .ok_or_else(|| DomainError::state("Cannot score a game without bids"))?;
    let scores = bids
        .iter()
        .zip(&state.tricks_won)
        .map(|(&bid, &won)| score(to_i32(bid)?, to_i32(won)?))
        .collect::<Result<Vec<_>, _>>()?;
    state.scores = scores;
    state.phase = Phase::Complete;
    Ok(())
}

fn to_i32(n: u32) -> Result<i32, DomainError> {
    i32::try_from(n).map_err(|_| DomainError::invalid_argument(format!("Count {n} out of range")))
}
