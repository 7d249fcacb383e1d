use drills::arrays::{generate_spiral, max_product, move_zeroes, plus_one, single_number, two_sum};

#[test]
fn two_sum_finds_earliest_completing_pair() {
    assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
    assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
    assert_eq!(two_sum(&[3, 3], 6), Some((0, 1)));
    assert_eq!(two_sum(&[1, 2], 10), None);
    assert_eq!(two_sum(&[], 0), None);
    assert_eq!(two_sum(&[i32::MAX, i32::MIN, 1], i32::MAX), None);
    assert_eq!(two_sum(&[i32::MIN, i32::MAX], -1), Some((0, 1)));
}

#[test]
fn move_zeroes_keeps_non_zero_order() {
    let mut v = [0, 1, 0, 3, 12];
    move_zeroes(&mut v);
    assert_eq!(v, [1, 3, 12, 0, 0]);

    let mut all_zero = [0, 0];
    move_zeroes(&mut all_zero);
    assert_eq!(all_zero, [0, 0]);
}

#[test]
fn single_number_cancels_pairs() {
    assert_eq!(single_number(&[2, 2, 1]), 1);
    assert_eq!(single_number(&[4, 1, 2, 1, 2]), 4);
    assert_eq!(single_number(&[-7]), -7);
    assert_eq!(single_number(&[]), 0);
}

#[test]
fn plus_one_carries() {
    assert_eq!(plus_one(vec![1, 2, 3]), vec![1, 2, 4]);
    assert_eq!(plus_one(vec![4, 3, 2, 9]), vec![4, 3, 3, 0]);
    assert_eq!(plus_one(vec![9, 9]), vec![1, 0, 0]);
    assert_eq!(plus_one(vec![0]), vec![1]);
}

#[test]
fn max_product_handles_signs_and_zeroes() {
    assert_eq!(max_product(&[2, 3, -2, 4]), Some(6));
    assert_eq!(max_product(&[-2, 0, -1]), Some(0));
    assert_eq!(max_product(&[-2]), Some(-2));
    assert_eq!(max_product(&[-2, 3, -4]), Some(24));
    assert_eq!(max_product(&[3, -1, 4]), Some(4));
    assert_eq!(max_product(&[]), None);
}

#[test]
fn spiral_fills_clockwise() {
    assert_eq!(
        generate_spiral(3),
        vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]
    );
    assert_eq!(
        generate_spiral(4),
        vec![
            vec![1, 2, 3, 4],
            vec![12, 13, 14, 5],
            vec![11, 16, 15, 6],
            vec![10, 9, 8, 7],
        ]
    );
    assert_eq!(generate_spiral(1), vec![vec![1]]);
    assert!(generate_spiral(0).is_empty());
}
