//! Algebraic laws shared by [`Optional<T>`] and [`Outcome<T, E>`].

use crate::prelude::*;

fn optionals() -> [Optional<i32>; 3] {
    [Present(0), Present(-7), Absent]
}

fn outcomes() -> [Outcome<i32, &'static str>; 3] {
    [Outcome::success(0), Outcome::success(-7), Outcome::failure("e")]
}

#[test]
fn fold_identity() {
    assert_eq!(Present(4).fold(|v| v + 1, || 0), 5);
    assert_eq!(Optional::<i32>::Absent.fold(|v| v + 1, || 0), 0);
    assert_eq!(Outcome::<i32, i32>::success(4).fold(|v| v + 1, |e| e - 1), 5);
    assert_eq!(Outcome::<i32, i32>::failure(4).fold(|v| v + 1, |e| e - 1), 3);
}

#[test]
fn map_identity() {
    for value in optionals() {
        assert_eq!(value.map(|v| v), value);
    }
    for value in outcomes() {
        assert_eq!(value.clone().map(|v| v), value);
    }
}

#[test]
fn map_composition() {
    let f = |v: i32| v * 3;
    let g = |v: i32| v - 1;

    for value in optionals() {
        assert_eq!(value.map(f).map(g), value.map(|v| g(f(v))));
    }
    for value in outcomes() {
        assert_eq!(value.clone().map(f).map(g), value.map(|v| g(f(v))));
    }
}

#[test]
fn flat_map_associativity() {
    let f = |v: i32| if v >= 0 { Present(v + 1) } else { Absent };
    let g = |v: i32| Present(v * 2);
    for value in optionals() {
        assert_eq!(value.flat_map(f).flat_map(g), value.flat_map(|v| f(v).flat_map(g)));
    }

    let f = |v: i32| if v >= 0 { Outcome::success(v + 1) } else { Outcome::failure("neg") };
    let g = |v: i32| Outcome::success(v * 2);
    for value in outcomes() {
        assert_eq!(
            value.clone().flat_map(f).flat_map(g),
            value.flat_map(|v| f(v).flat_map(g))
        );
    }
}

#[test]
fn flat_map_left_identity() {
    let f = |v: i32| if v > 0 { Present(v) } else { Absent };
    assert_eq!(Present(3).flat_map(f), f(3));
    assert_eq!(Present(-3).flat_map(f), f(-3));
}

#[test]
fn failure_flat_map_is_failure() {
    let failure = Outcome::<i32, &str>::failure("e");
    assert_eq!(
        failure.flat_map(|_| -> Outcome<i32, &'static str> { unreachable!() }),
        Outcome::failure("e")
    );
    assert_eq!(
        Optional::<i32>::Absent.flat_map(|_| -> Optional<i32> { unreachable!() }),
        Absent
    );
}

#[test]
fn transpose_round_trips() {
    let nested: [Optional<Outcome<i32, &str>>; 3] = [
        Absent,
        Present(Outcome::success(1)),
        Present(Outcome::failure("e")),
    ];
    for value in nested {
        assert_eq!(value.clone().transpose().transpose(), value);
    }

    let nested: [Outcome<Optional<i32>, &str>; 3] = [
        Outcome::success(Absent),
        Outcome::success(Present(1)),
        Outcome::failure("e"),
    ];
    for value in nested {
        assert_eq!(value.clone().transpose().transpose(), value);
    }
}

#[test]
fn flatten_cases() {
    assert_eq!(Present(Present(1)).flatten(), Present(1));
    assert_eq!(Present(Optional::<i32>::Absent).flatten(), Absent);
    assert_eq!(Optional::<Optional<i32>>::Absent.flatten(), Absent);

    type Nested = Outcome<Outcome<i32, &'static str>, &'static str>;
    assert_eq!(Nested::success(Outcome::success(1)).flatten(), Outcome::success(1));
    assert_eq!(Nested::success(Outcome::failure("in")).flatten(), Outcome::failure("in"));
    assert_eq!(Nested::failure("out").flatten(), Outcome::failure("out"));
}

#[test]
fn scenarios() {
    assert_eq!(Optional::from_nullable(Some(5)).map(|x| x * 2).get_or_else(0), 10);
    assert_eq!(Optional::<i32>::from_nullable(None).map(|x| x * 2).get_or_else(0), 0);
    assert_eq!(
        Outcome::<i32, &str>::success(5)
            .flat_map(|x| if x > 0 { Outcome::success(x * 2) } else { Outcome::failure("neg") })
            .fold(|v| v, |_| -1),
        10
    );
    assert_eq!(
        Outcome::<String, String>::failure("boom".to_owned())
            .map_err(|e| e + "!")
            .fold(|v| v, |e| e),
        "boom!"
    );
    assert_eq!(
        Present(Outcome::<i32, &str>::failure("e")).transpose(),
        Outcome::failure("e")
    );
}

#[test]
fn outcomes_cross_threads() {
    use rayon::prelude::*;

    let checked = (1..=64)
        .into_par_iter()
        .map(|n: u32| Present(n).filter(|n| n % 13 != 0).ok_or(n))
        .collect::<Vec<_>>();

    let collected: Outcome<Vec<u32>, u32> = checked.iter().cloned().collect();
    assert_eq!(collected, Outcome::failure(13));

    let passed = checked.into_iter().filter_map(|o| o.ok().to_nullable()).count();
    assert_eq!(passed, 64 - 4);
}
