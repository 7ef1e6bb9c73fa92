use ferrite_perceptron::{accuracy, fit, MultiClassPerceptron, PerceptronResult};
use rand::Rng;

fn main() -> PerceptronResult<()> {
    let mut rng = rand::thread_rng();

    // Three well-separated 2D clusters, one per class.
    let centers = [(0.0, 4.0), (4.0, -2.0), (-4.0, -2.0)];
    let mut inputs = Vec::new();
    let mut labels = Vec::new();
    for (class, &(cx, cy)) in centers.iter().enumerate() {
        for _ in 0..40 {
            let x = cx + rng.gen::<f64>() * 2.0 - 1.0;
            let y = cy + rng.gen::<f64>() * 2.0 - 1.0;
            inputs.push(vec![x, y]);
            labels.push(class);
        }
    }

    let mut perceptron = MultiClassPerceptron::new(2, centers.len(), 0.1);
    let converged = fit(&mut perceptron, &inputs, &labels, 200)?;
    println!("Converged: {converged}");
    println!(
        "Training accuracy: {:.1}%",
        accuracy(&perceptron, &inputs, &labels)? * 100.0
    );

    for &(cx, cy) in &centers {
        println!(
            "Center ({cx:+.1}, {cy:+.1}) -> class {}",
            perceptron.classify(&[cx, cy])?
        );
    }

    Ok(())
}
