use ferrite_perceptron::{train_set_with, BinaryPerceptron, PerceptronResult};

fn main() -> PerceptronResult<()> {
    let mut perceptron = BinaryPerceptron::new(2, 0.1, 0.5);

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let labels = vec![false, false, false, true];

    let converged = train_set_with(&mut perceptron, &inputs, &labels, 100, |stats| {
        println!(
            "Pass {}: {}/{} misclassified",
            stats.pass, stats.failures, stats.set_size
        );
    })?;
    println!("Converged: {converged}");

    for (input, expected) in inputs.iter().zip(labels.iter()) {
        let predicted = perceptron.classify(input)?;
        println!("Input: {input:?} -> {predicted} (expected {expected})");
    }
    println!("Weights (bias first): {:?}", perceptron.weights());

    Ok(())
}
