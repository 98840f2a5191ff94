use crate::model::group::Group;
use crate::rng::{UniformSource, shuffle};

pub fn run_stage7(groups: &mut [Group], source: &mut dyn UniformSource) {
    for group in groups.iter_mut().filter(|g| g.is_pair()) {
        if source.next_uniform() >= 0.5 {
            group.members.swap(0, 1);
        }
    }
    shuffle(groups, source);
}
