/// Index of the first maximum, so ties resolve to the lowest index.
pub fn argmax<'a>(values: impl IntoIterator<Item = &'a f64>) -> usize {
    let mut result: usize = 0;
    let mut max: f64 = f64::NEG_INFINITY;
    for (i, v) in values.into_iter().enumerate() {
        if *v > max {
            max = *v;
            result = i;
        }
    }
    result
}

pub fn max<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    values
        .into_iter()
        .fold(f64::NEG_INFINITY, |acc, x| acc.max(*x))
}

pub fn moving_average(window: usize, vector: &[f64]) -> Vec<f64> {
    let window: usize = window.max(1);
    let mut aux: usize = 0;
    let mut result: Vec<f64> = vec![];
    while aux < vector.len() {
        let end: usize = if aux + window < vector.len() {
            aux + window
        } else {
            vector.len()
        };
        let slice: &[f64] = &vector[aux..end];
        let r: f64 = slice.iter().sum();
        result.push(r / slice.len() as f64);
        aux = end;
    }
    result
}
