/// Property-based tests for hand evaluation using proptest
///
/// Проверяем перебор комбинаций, выбор лучшей руки и поиск победителей
/// на случайных наборах карт без повторов.
use std::collections::HashSet;

use poker_hand_eval::domain::{Card, Deck};
use poker_hand_eval::eval::{
    best_hand, binomial, classify, combinations, hand_size,
    resolve_winners, HandCategory, PlayerHandSummary,
};
use proptest::prelude::*;

// Strategy: n уникальных карт из стандартной колоды, в случайном порядке
fn unique_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(Deck::standard_52().into_cards(), n).prop_shuffle()
}

fn card_set_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Card>> {
    (min..=max).prop_flat_map(unique_cards)
}

proptest! {
    #[test]
    fn combinations_are_complete_and_unique(cards in card_set_strategy(1, 9)) {
        let k = hand_size(cards.len());
        let subsets = combinations(&cards, k).unwrap();

        prop_assert_eq!(subsets.len(), binomial(cards.len(), k));

        let mut seen: HashSet<Vec<u32>> = HashSet::new();
        for subset in &subsets {
            prop_assert_eq!(subset.len(), k);
            prop_assert!(subset.iter().all(|c| cards.contains(c)));

            let mut key: Vec<u32> = subset.iter().map(Card::value).collect();
            key.sort_unstable();
            key.dedup();
            prop_assert_eq!(key.len(), k, "повтор карты внутри подмножества");
            prop_assert!(seen.insert(key), "подмножество встретилось дважды");
        }
    }

    #[test]
    fn best_hand_dominates_every_subset(cards in unique_cards(7)) {
        let best = best_hand(&cards).unwrap();
        prop_assert_eq!(best.cards.len(), 5);

        for subset in combinations(&cards, 5).unwrap() {
            let e = classify(&subset);
            prop_assert!(!e.beats(&best));
        }
        // лучшая пятёрка переоценивается в то же самое
        prop_assert_eq!(classify(&best.cards).strength(), best.strength());
    }

    #[test]
    fn order_of_input_does_not_matter(cards in unique_cards(7)) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(
            best_hand(&cards).unwrap().strength(),
            best_hand(&reversed).unwrap().strength()
        );
    }

    #[test]
    fn tie_value_is_only_compared_within_category(a in unique_cards(5), b in unique_cards(5)) {
        let ea = classify(&a);
        let eb = classify(&b);
        let outcomes = [ea.beats(&eb), eb.beats(&ea), ea.ties_with(&eb)];
        prop_assert_eq!(outcomes.iter().filter(|&&x| x).count(), 1);
        if ea.category != eb.category {
            prop_assert_eq!(ea.beats(&eb), ea.category > eb.category);
        }
    }

    #[test]
    fn royal_flush_only_for_suited_broadway(cards in unique_cards(5)) {
        let e = classify(&cards);
        if e.category == HandCategory::RoyalFlush {
            let mut ranks: Vec<u8> = cards.iter().map(Card::rank).collect();
            ranks.sort_unstable();
            prop_assert_eq!(ranks, vec![1, 10, 11, 12, 13]);
            prop_assert!(cards.iter().all(|c| c.suit() == cards[0].suit()));
            prop_assert!(e.tie_value >= 205);
        }
    }

    #[test]
    fn winners_share_the_maximum(deal in unique_cards(15)) {
        // 5 игроков по 2 карты + общий борд из 5
        let (holes, shared) = deal.split_at(10);
        let summaries: Vec<PlayerHandSummary> = holes
            .chunks(2)
            .enumerate()
            .map(|(i, hole)| {
                let mut set = hole.to_vec();
                set.extend_from_slice(shared);
                PlayerHandSummary { player_id: i as u64 + 1, best: best_hand(&set).unwrap() }
            })
            .collect();

        let result = resolve_winners(&summaries).unwrap();
        let max = (result.category.stage(), result.tie_value);
        for s in &summaries {
            if result.winners.contains(&s.player_id) {
                prop_assert_eq!(s.best.strength(), max);
            } else {
                prop_assert!(s.best.strength() < max);
            }
        }
    }
}
