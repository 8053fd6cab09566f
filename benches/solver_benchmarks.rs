use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use filum::{
    board::Board,
    solver::{
        config::{ConsistencyCheck, HeuristicCheck, SolverConfig, ValueSelection, VariableSelection},
        engine::Solver,
    },
};

fn nine_by_nine() -> Board {
    #[rustfmt::skip]
    let cells = vec![
        5, 3, 0, 0, 7, 0, 0, 0, 0,
        6, 0, 0, 1, 9, 5, 0, 0, 0,
        0, 9, 8, 0, 0, 0, 0, 6, 0,
        8, 0, 0, 0, 6, 0, 0, 0, 3,
        4, 0, 0, 8, 0, 3, 0, 0, 1,
        7, 0, 0, 0, 2, 0, 0, 0, 6,
        0, 6, 0, 0, 0, 0, 2, 8, 0,
        0, 0, 0, 4, 1, 9, 0, 0, 5,
        0, 0, 0, 0, 8, 0, 0, 7, 9,
    ];
    Board::new(3, 3, cells).unwrap()
}

fn bench_configurations(c: &mut Criterion) {
    let board = nine_by_nine();

    let configurations = [
        (
            "first_inorder_fc",
            SolverConfig {
                consistency: ConsistencyCheck::ForwardChecking,
                ..SolverConfig::default()
            },
        ),
        (
            "mrv_inorder_fc",
            SolverConfig {
                variable_selection: VariableSelection::MinimumRemainingValues,
                consistency: ConsistencyCheck::ForwardChecking,
                ..SolverConfig::default()
            },
        ),
        (
            "mrv_lcv_ac",
            SolverConfig {
                variable_selection: VariableSelection::MinimumRemainingValues,
                value_selection: ValueSelection::LeastConstraining,
                consistency: ConsistencyCheck::ArcConsistency,
                ..SolverConfig::default()
            },
        ),
        (
            "mrv_lcv_ac_naked_both",
            SolverConfig {
                variable_selection: VariableSelection::MinimumRemainingValues,
                value_selection: ValueSelection::LeastConstraining,
                consistency: ConsistencyCheck::ArcConsistency,
                heuristic_check: HeuristicCheck::Both,
            },
        ),
    ];

    let mut group = c.benchmark_group("nine_by_nine");
    for (label, config) in configurations {
        group.bench_with_input(BenchmarkId::from_parameter(label), &config, |b, config| {
            b.iter(|| {
                let solver = Solver::new(*config);
                black_box(solver.solve(&board).unwrap())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_configurations);
criterion_main!(benches);
