use crate::{Events, MatchState};

/// Apply this tick's pass and hit events to the match.
///
/// The pass event is taken, so a point is counted once even if scoring runs
/// again before the events are cleared.
pub fn track_score(state: &mut MatchState, events: &mut Events) {
    if events.paddle_hit.is_some() {
        state.record_hit();
    }

    if let Some(edge) = events.take_ball_passed() {
        // The defender of the edge missed, the other side scores
        let scorer = edge.opponent();
        let rally = state.rally;
        let was_over = state.is_over();
        state.award_point(scorer);
        log::debug!(
            "{scorer:?} scores after a rally of {rally}, score {}-{}",
            state.score[0],
            state.score[1]
        );

        if !was_over {
            if let Some(winner) = state.has_winner() {
                log::info!("{winner:?} wins, first to {} points", state.win_condition);
            }
        }
    }
}
