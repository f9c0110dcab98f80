use splitcell::group::count_runs;

#[test]
fn empty_input_empty_output() {
    let runs = count_runs::<u64>(&[]);
    assert!(runs.is_empty());
}

#[test]
fn runs_are_sorted_and_conserve_length() {
    let values: Vec<u64> = vec![9, 3, 3, 7, 9, 9, 1];
    let runs = count_runs(&values);
    assert_eq!(runs, vec![(1, 1), (3, 2), (7, 1), (9, 3)]);
    let total: u64 = runs.iter().map(|&(_, n)| n).sum();
    assert_eq!(total, values.len() as u64);
}

#[test]
fn input_order_does_not_matter() {
    let a = count_runs(&[5u64, 2, 5, 2, 5]);
    let b = count_runs(&[2u64, 5, 5, 2, 5]);
    assert_eq!(a, b);
}

#[test]
fn works_for_any_ord_key() {
    // Binning groups on count values rather than ids; same utility.
    let counts: Vec<u64> = vec![2, 1, 3, 1, 2, 1];
    assert_eq!(count_runs(&counts), vec![(1, 3), (2, 2), (3, 1)]);
}
