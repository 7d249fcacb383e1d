/// An `n`×`n` matrix filled with `1..=n*n` in clockwise spiral order from the top-left.
pub fn generate_spiral(n: usize) -> Vec<Vec<u32>> {
    let mut matrix = vec![vec![0u32; n]; n];
    if n == 0 {
        return matrix;
    }

    let (mut top, mut bottom) = (0i64, n as i64 - 1);
    let (mut left, mut right) = (0i64, n as i64 - 1);
    let mut next = 1u32;
    let mut put = |m: &mut Vec<Vec<u32>>, r: i64, c: i64| {
        m[r as usize][c as usize] = next;
        next += 1;
    };

    while top <= bottom && left <= right {
        for c in left..=right {
            put(&mut matrix, top, c);
        }
        top += 1;

        for r in top..=bottom {
            put(&mut matrix, r, right);
        }
        right -= 1;

        if top <= bottom {
            for c in (left..=right).rev() {
                put(&mut matrix, bottom, c);
            }
            bottom -= 1;
        }

        if left <= right {
            for r in (top..=bottom).rev() {
                put(&mut matrix, r, left);
            }
            left += 1;
        }
    }
    matrix
}
