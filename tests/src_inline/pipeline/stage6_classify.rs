use super::*;

fn person(id: usize, raw: f64, noisy: f64) -> Participant {
    let mut p = Participant::new(id, format!("p{id}"), raw);
    p.noisy_score = noisy;
    p
}

fn stats(std_dev: f64, alpha: f64) -> Statistics {
    Statistics {
        mean: 0.0,
        std_dev,
        noise_factor: 0.2,
        alpha,
    }
}

#[test]
fn test_gap_above_alpha_is_teacher_led() {
    let a = person(0, 100.0, 100.0);
    let b = person(1, 70.0, 70.0);
    let out = classify_pair(&a, &b, &stats(10.0, 1.5));
    assert_eq!(out.mode, TeachingMode::TeacherLed);
    assert_eq!(out.teacher, Some(0));
}

#[test]
fn test_gap_exactly_alpha_is_balanced() {
    let a = person(0, 100.0, 100.0);
    let b = person(1, 90.0, 90.0);
    let out = classify_pair(&a, &b, &stats(10.0, 1.0));
    assert_eq!(out.mode, TeachingMode::Balanced);
    assert_eq!(out.teacher, None);

    let out = classify_pair(&a, &b, &stats(10.0, 0.999));
    assert_eq!(out.mode, TeachingMode::TeacherLed);
}

#[test]
fn test_teacher_uses_raw_not_noisy() {
    // noise flipped the ranking but raw score decides the teacher
    let a = person(0, 60.0, 95.0);
    let b = person(1, 80.0, 40.0);
    let out = classify_pair(&a, &b, &stats(10.0, 1.0));
    assert_eq!(out.mode, TeachingMode::TeacherLed);
    assert_eq!(out.teacher, Some(1));
}

#[test]
fn test_raw_tie_prefers_earlier_roster_entry() {
    let a = person(4, 50.0, 80.0);
    let b = person(2, 50.0, 20.0);
    assert_eq!(stronger_member(&a, &b), 2);
    assert_eq!(stronger_member(&b, &a), 2);
}

#[test]
fn test_zero_std_dev_gap_is_zero() {
    assert_eq!(score_gap(10.0, 3.0, 0.0), 0.0);
    let a = person(0, 5.0, 5.0);
    let b = person(1, 5.0, 5.0);
    let out = classify_pair(&a, &b, &stats(0.0, 0.0));
    assert_eq!(out.mode, TeachingMode::Balanced);
}

#[test]
fn test_trios_are_always_balanced() {
    let people = vec![
        person(0, 100.0, 100.0),
        person(1, 0.0, 0.0),
        person(2, 50.0, 50.0),
        person(3, 10.0, 10.0),
        person(4, 90.0, 90.0),
    ];
    let mut groups = vec![Group::pair(0, 1), Group::trio([2, 3, 4])];
    run_stage6(&mut groups, &people, &stats(10.0, 1.0));
    assert_eq!(groups[0].mode, TeachingMode::TeacherLed);
    assert_eq!(groups[0].teacher, Some(0));
    assert_eq!(groups[1].mode, TeachingMode::Balanced);
    assert_eq!(groups[1].teacher, None);
}

#[test]
fn test_reclassification_clears_stale_teacher() {
    let people = vec![person(0, 10.0, 10.0), person(1, 9.0, 9.0)];
    let mut groups = vec![Group::pair(1, 0)];
    groups[0].mode = TeachingMode::TeacherLed;
    groups[0].teacher = Some(1);
    run_stage6(&mut groups, &people, &stats(10.0, 1.0));
    assert_eq!(groups[0].mode, TeachingMode::Balanced);
    assert_eq!(groups[0].teacher, None);
}
