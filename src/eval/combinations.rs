use crate::domain::card::Card;

use super::errors::EvalError;

/// Размер покерной комбинации.
pub const HAND_SIZE: usize = 5;

/// Сколько карт берём в комбинацию из набора размера `n`.
pub fn hand_size(n: usize) -> usize {
    n.min(HAND_SIZE)
}

/// Биномиальный коэффициент C(n, k).
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}

/// Все k-элементные подмножества `cards`, каждое ровно один раз.
///
/// Перебор индексов в лексикографическом порядке; вход не изменяется.
pub fn combinations(cards: &[Card], k: usize) -> Result<Vec<Vec<Card>>, EvalError> {
    let n = cards.len();
    if k > n {
        return Err(EvalError::SubsetTooLarge { k, n });
    }
    if k == 0 {
        return Ok(vec![Vec::new()]);
    }

    let mut idx: Vec<usize> = (0..k).collect();
    let mut out = Vec::with_capacity(binomial(n, k));

    loop {
        out.push(idx.iter().map(|&i| cards[i]).collect());

        // Ищем самый правый индекс, который ещё можно сдвинуть.
        let mut i = k;
        loop {
            if i == 0 {
                return Ok(out);
            }
            i -= 1;
            if idx[i] != i + n - k {
                break;
            }
        }

        idx[i] += 1;
        for j in (i + 1)..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}
