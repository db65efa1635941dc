//! Behaviour shared by every solver, checked against each of them.

use std::f64::consts::FRAC_PI_2;

use approx::assert_relative_eq;

use crate::{
    Bisection, Brenth, Brentq, Condition, Config, ConfigError, Event, MACHINE_EPSILON, Options,
    Ridder, RootSolver, nearly_equal,
};

fn build<S: From<Config>>(options: Options) -> S {
    S::from(Config::try_from(options).expect("valid options"))
}

fn lenient<S: From<Config>>(options: Options) -> S {
    build(Options {
        raise_on_fail: false,
        ..options
    })
}

fn cubic(x: f64) -> f64 {
    x * x * x - x - 2.0
}

fn three_roots(x: f64) -> f64 {
    x * x * x - x * x - 3.0 * x + 2.0
}

fn rejects_invalid_config<S: RootSolver + From<Config>>() {
    let solver = |options: Options| Config::try_from(options).map(S::from).map(|_| ());

    for xtol in [MACHINE_EPSILON / 2.0, -1.0] {
        let options = Options {
            xtol,
            ..Options::default()
        };
        assert!(matches!(solver(options), Err(ConfigError::XTol { .. })));
    }
    for epsilon in [MACHINE_EPSILON / 2.0, -1.0] {
        let options = Options {
            epsilon,
            ..Options::default()
        };
        assert!(matches!(solver(options), Err(ConfigError::Epsilon { .. })));
    }
    let options = Options {
        max_iter: -1,
        ..Options::default()
    };
    assert!(matches!(solver(options), Err(ConfigError::MaxIter { .. })));
}

fn small_initial_bracket<S: RootSolver + From<Config>>() {
    let options = Options {
        xtol: 1e-4,
        ..Options::default()
    };

    let solution = lenient::<S>(options)
        .solve(|x| x, -1e-8, -2e-8)
        .expect("non-raising config");
    assert!(!solution.converged);
    assert_eq!(solution.condition, Condition::SmallBracket);
    assert_eq!(solution.message(), "Bracket is smaller than tolerance.");
    assert_eq!(solution.func_calls, 0);
    assert_eq!(solution.x0, None);

    let error = build::<S>(options)
        .solve(|x| x, -1e-8, -2e-8)
        .expect_err("raising config");
    assert_eq!(error.solution.condition, Condition::SmallBracket);
}

fn small_bracket_during_iterations<S: RootSolver + From<Config>>() {
    let options = Options {
        xtol: MACHINE_EPSILON * 20.0,
        ..Options::default()
    };
    let (a, b) = (FRAC_PI_2 + 0.1, FRAC_PI_2 - 0.1);

    let solution = lenient::<S>(options)
        .solve(f64::tan, a, b)
        .expect("non-raising config");
    assert!(!solution.converged);
    assert_eq!(solution.condition, Condition::SmallBracket);
    assert_relative_eq!(solution.x0.unwrap(), FRAC_PI_2, epsilon = 1e-6);

    let error = build::<S>(options)
        .solve(f64::tan, a, b)
        .expect_err("raising config");
    assert_eq!(error.to_string(), "Bracket is smaller than tolerance.");
}

fn root_on_lower_bracket<S: RootSolver + From<Config>>() {
    let epsilon = 1e-2;
    let solution = build::<S>(Options {
        epsilon,
        ..Options::default()
    })
    .solve(|x| x, -1e-4, 1.0)
    .expect("converges");

    assert!(solution.converged);
    assert_eq!(solution.x0, Some(-1e-4));
    assert!(solution.fx0.unwrap().abs() < epsilon);
    assert_eq!(solution.func_calls, 1);
    assert_eq!(solution.iterations, 0);
    assert_eq!(solution.message(), "Root is equal to the lower bracket");
}

fn root_on_upper_bracket<S: RootSolver + From<Config>>() {
    let epsilon = 1e-2;
    let solution = build::<S>(Options {
        epsilon,
        ..Options::default()
    })
    .solve(|x| x, -1.0, 1e-4)
    .expect("converges");

    assert!(solution.converged);
    assert_eq!(solution.x0, Some(1e-4));
    assert!(solution.fx0.unwrap().abs() < epsilon);
    assert_eq!(solution.func_calls, 2);
    assert_eq!(solution.message(), "Root is equal to the upper bracket");
}

fn root_not_bracketed<S: RootSolver + From<Config>>() {
    let solution = lenient::<S>(Options::default())
        .solve(|x| x, 1.0, 2.0)
        .expect("non-raising config");
    assert!(!solution.converged);
    assert_eq!(solution.func_calls, 2);
    assert_eq!(solution.x0, None);
    assert_eq!(solution.message(), "Root is not bracketed.");

    let error = build::<S>(Options::default())
        .solve(|x| x, 1.0, 2.0)
        .expect_err("raising config");
    assert_eq!(error.solution.condition, Condition::NotBracketed);
    assert_eq!(error.solution.func_calls, 2);
}

fn linear_equation<S: RootSolver + From<Config>>() {
    let solution = S::from(Config::default())
        .solve(|x| x, -1.0, 1.0)
        .expect("converges");

    assert!(solution.converged);
    assert_eq!(solution.x0, Some(0.0));
    assert_eq!(solution.fx0, Some(0.0));
    assert_eq!(solution.func_calls, 3);
    assert_eq!(solution.message(), "Solution converged.");
}

fn max_iterations<S: RootSolver + From<Config>>(expected_calls: usize) {
    let options = Options {
        max_iter: 1,
        ..Options::default()
    };

    let solution = lenient::<S>(options)
        .solve(cubic, 1.0, 2.0)
        .expect("non-raising config");
    assert!(!solution.converged);
    assert_eq!(solution.func_calls, expected_calls);
    assert_eq!(solution.iterations, 1);
    assert_eq!(solution.message(), "Exceeded max iterations.");

    let error = build::<S>(options)
        .solve(cubic, 1.0, 2.0)
        .expect_err("raising config");
    assert_eq!(error.solution.condition, Condition::MaxIterationsExceeded);
}

fn finds_root_of_quadratic<S: RootSolver + From<Config>>() {
    let epsilon = 1e-5;
    let solution = build::<S>(Options {
        epsilon,
        ..Options::default()
    })
    .solve(|x| x * x - 3.0 * x + 2.0, 0.5, 1.5)
    .expect("converges");

    assert!(nearly_equal(solution.x0.unwrap(), 1.0, epsilon));
    assert!(nearly_equal(solution.fx0.unwrap(), 0.0, epsilon));
    assert_eq!(solution.message(), "Solution converged.");
}

fn finds_each_of_three_roots<S: RootSolver + From<Config>>() {
    let epsilon = 1e-3;
    let solver = build::<S>(Options {
        epsilon,
        ..Options::default()
    });

    for (a, b, root) in [(-2.5, 0.0, -1.618), (0.0, 1.0, 0.618), (1.0, 2.5, 2.0)] {
        let solution = solver.solve(three_roots, a, b).expect("converges");
        assert!(nearly_equal(solution.x0.unwrap(), root, epsilon));
        assert!(nearly_equal(solution.fx0.unwrap(), 0.0, epsilon));
    }

    let solution = solver.solve(three_roots, -2.5, 2.5).expect("converges");
    let x0 = solution.x0.unwrap();
    assert!(
        [-1.618, 0.618, 2.0]
            .iter()
            .any(|&root| nearly_equal(x0, root, epsilon)),
        "unexpected root {x0}"
    );
}

fn finds_root_of_cubic<S: RootSolver + From<Config>>() {
    let epsilon = 1e-3;
    let solution = build::<S>(Options {
        epsilon,
        ..Options::default()
    })
    .solve(cubic, 1.0, 2.0)
    .expect("converges");

    assert!(nearly_equal(solution.x0.unwrap(), 1.521, epsilon));
    assert!(nearly_equal(solution.fx0.unwrap(), 0.0, epsilon));
}

fn forwards_extra_args<S: RootSolver + From<Config>>() {
    let coefficients = [-4.0, 0.0, 1.0];
    let polynomial = |x: f64, c: &[f64]| c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci);

    let solution = S::from(Config::default())
        .solve_with_args(polynomial, 0.0, 5.0, &coefficients[..])
        .expect("converges");

    assert_relative_eq!(solution.x0.unwrap(), 2.0, epsilon = 1e-6);
}

fn records_every_call<S: RootSolver + From<Config>>() {
    let mut events: Vec<Event> = Vec::new();
    let mut observer = |event: &Event| events.push(*event);

    let solution = S::from(Config::default())
        .solve_observed(cubic, 1.0, 2.0, &mut observer)
        .expect("converges");

    assert_eq!(solution.steps.len(), solution.func_calls);
    assert_eq!(solution.steps[0].x, 1.0);
    assert_eq!(solution.steps[1].x, 2.0);
    assert_eq!(solution.estimate(), solution.steps.last().copied());

    assert_eq!(events[0].iter, 0);
    assert_eq!(events[0].calls, 2);
    assert!(events.iter().all(|event| event.solver == S::NAME));
    assert!(events.windows(2).all(|pair| pair[0].calls < pair[1].calls));
    let last = events.last().expect("at least one event");
    assert_eq!(last.calls, solution.func_calls);
    assert_eq!(last.iter, solution.iterations);
}

macro_rules! solver_tests {
    ($name:ident, $solver:ty, max_iter_calls = $calls:expr) => {
        mod $name {
            use super::*;

            #[test]
            fn rejects_invalid_config() {
                super::rejects_invalid_config::<$solver>();
            }

            #[test]
            fn small_initial_bracket() {
                super::small_initial_bracket::<$solver>();
            }

            #[test]
            fn small_bracket_during_iterations() {
                super::small_bracket_during_iterations::<$solver>();
            }

            #[test]
            fn root_on_lower_bracket() {
                super::root_on_lower_bracket::<$solver>();
            }

            #[test]
            fn root_on_upper_bracket() {
                super::root_on_upper_bracket::<$solver>();
            }

            #[test]
            fn root_not_bracketed() {
                super::root_not_bracketed::<$solver>();
            }

            #[test]
            fn linear_equation() {
                super::linear_equation::<$solver>();
            }

            #[test]
            fn max_iterations() {
                super::max_iterations::<$solver>($calls);
            }

            #[test]
            fn finds_root_of_quadratic() {
                super::finds_root_of_quadratic::<$solver>();
            }

            #[test]
            fn finds_each_of_three_roots() {
                super::finds_each_of_three_roots::<$solver>();
            }

            #[test]
            fn finds_root_of_cubic() {
                super::finds_root_of_cubic::<$solver>();
            }

            #[test]
            fn forwards_extra_args() {
                super::forwards_extra_args::<$solver>();
            }

            #[test]
            fn records_every_call() {
                super::records_every_call::<$solver>();
            }
        }
    };
}

solver_tests!(bisection, Bisection, max_iter_calls = 3);
solver_tests!(ridder, Ridder, max_iter_calls = 4);
solver_tests!(brentq, Brentq, max_iter_calls = 3);
solver_tests!(brenth, Brenth, max_iter_calls = 3);
