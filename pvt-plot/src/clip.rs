/// Splits a polyline into the runs that lie on or above `floor`.
///
/// Where a segment crosses the floor, the crossing point is interpolated so
/// that the visible run ends exactly on it. Non-finite points break the line.
/// Runs with fewer than two points are dropped.
pub(crate) fn runs_above(points: &[(f64, f64)], floor: f64) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut run = Vec::new();
    let mut prev: Option<(f64, f64)> = None;

    for &point in points {
        let (x, y) = point;
        if !x.is_finite() || !y.is_finite() {
            flush(&mut runs, &mut run);
            prev = None;
            continue;
        }

        let above = y >= floor;
        match prev {
            Some(last) if last.1 >= floor => {
                if above {
                    run.push(point);
                } else {
                    run.push(crossing(last, point, floor));
                    flush(&mut runs, &mut run);
                }
            }
            Some(last) => {
                if above {
                    run.push(crossing(last, point, floor));
                    run.push(point);
                }
            }
            None => {
                if above {
                    run.push(point);
                }
            }
        }
        prev = Some(point);
    }

    flush(&mut runs, &mut run);
    runs
}

fn flush(runs: &mut Vec<Vec<(f64, f64)>>, run: &mut Vec<(f64, f64)>) {
    let taken = std::mem::take(run);
    if taken.len() >= 2 {
        runs.push(taken);
    }
}

/// Point where the segment from `a` to `b` meets `y = floor`.
///
/// Callers guarantee `a` and `b` lie on opposite sides of the floor.
fn crossing(a: (f64, f64), b: (f64, f64), floor: f64) -> (f64, f64) {
    let t = (floor - a.1) / (b.1 - a.1);
    (a.0 + t * (b.0 - a.0), floor)
}
