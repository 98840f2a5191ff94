use crate::model::participant::Participant;

// stable: equal noisy scores keep roster order
pub fn run_stage4(participants: &[Participant]) -> Vec<usize> {
    let mut order = participants.iter().map(|p| p.id).collect::<Vec<_>>();
    order.sort_by(|&a, &b| {
        participants[b]
            .noisy_score
            .partial_cmp(&participants[a].noisy_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}
