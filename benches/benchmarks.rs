use nlhe_solver::cards::deck::Deck;
use nlhe_solver::cards::evaluator::evaluate7;
use nlhe_solver::cards::street::Street;
use nlhe_solver::cards::{bucket, Hole};
use nlhe_solver::gameplay::state::{GameState, MAX_PLAYERS};
use nlhe_solver::mccfr::{Trainer, TrainerConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_seven_card_hand,
        shuffling_and_drawing_a_deck,
        bucketing_a_river_hand,
        dealing_a_heads_up_hand,
        exploring_legal_actions,
        training_one_iteration,
}

fn evaluating_seven_card_hand(c: &mut criterion::Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let cards = Deck::shuffled(&mut rng).draw(7);
    c.bench_function("evaluate a 7-card hand", |b| b.iter(|| evaluate7(&cards)));
}

fn shuffling_and_drawing_a_deck(c: &mut criterion::Criterion) {
    let mut rng = SmallRng::seed_from_u64(2);
    c.bench_function("shuffle a deck and draw 7 cards", |b| {
        b.iter(|| Deck::shuffled(&mut rng).draw(7))
    });
}

fn bucketing_a_river_hand(c: &mut criterion::Criterion) {
    let mut rng = SmallRng::seed_from_u64(3);
    let cards = Deck::shuffled(&mut rng).draw(7);
    let hole = &cards[..2];
    let board = &cards[2..];
    c.bench_function("bucket a river hand", |b| {
        b.iter(|| bucket::bucket(hole, board, Street::River))
    });
}

fn dealing_a_heads_up_hand(c: &mut criterion::Criterion) {
    let mut rng = SmallRng::seed_from_u64(4);
    c.bench_function("deal a heads-up hand", |b| {
        b.iter(|| {
            let mut deck = Deck::shuffled(&mut rng);
            let mut stacks = [0u32; MAX_PLAYERS];
            stacks[0] = 200;
            stacks[1] = 200;
            let mut state = GameState::new_hand(2, 0, 1, 2, stacks);
            for seat in 0..2 {
                let pair = deck.draw(2);
                state.deal_hole(seat, Hole::new(pair[0], pair[1]));
            }
            state
        })
    });
}

fn exploring_legal_actions(c: &mut criterion::Criterion) {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut deck = Deck::shuffled(&mut rng);
    let mut stacks = [0u32; MAX_PLAYERS];
    stacks[0] = 200;
    stacks[1] = 200;
    let mut state = GameState::new_hand(2, 0, 1, 2, stacks);
    for seat in 0..2 {
        let pair = deck.draw(2);
        state.deal_hole(seat, Hole::new(pair[0], pair[1]));
    }
    c.bench_function("enumerate legal actions at a decision node", |b| {
        b.iter(|| state.legal_actions())
    });
}

fn training_one_iteration(c: &mut criterion::Criterion) {
    let mut rng = SmallRng::seed_from_u64(6);
    let config = TrainerConfig {
        player_counts: vec![2],
        stack_buckets_bb: vec![20],
        small_blind: 1,
        big_blind: 2,
        depth_cap: 200,
    };
    let mut trainer = Trainer::new(config);
    c.bench_function("run one external-sampling MCCFR iteration", |b| {
        b.iter(|| trainer.run(1, &mut rng))
    });
}
