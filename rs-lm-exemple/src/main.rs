use rs_lm_core::io::read_corpus;
use rs_lm_core::model::language_model::LanguageModel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a model with a window of 6 characters and a fixed seed value
    // Same seed value -> same generated texts, run after run
    // Use LanguageModel::new(6) instead for different texts at every run
    let mut model = LanguageModel::with_seed(6, 42)?;

    // A window length of zero is rejected at construction
    match LanguageModel::new(0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("A window length of 0 is invalid, must be >= 1"),
    }

    // Train on the corpus; the whole file is read into a single string
    // Training again later adds on top of the current counts
    let corpus = read_corpus("./data/corpus.txt")?;
    model.train(&corpus);
    println!(
        "Learned {} windows of {} characters",
        model.window_count(),
        model.window_length()
    );

    // A seed text shorter than the window cannot form a context,
    // so it comes back unchanged (no error)
    println!("Too short seed: {:?}", model.generate("ab", 50));

    // Generate from a custom seed text
    // The trailing window must appear in the corpus, otherwise the text
    // stops right away; the corpus start is always a known window
    let seed_text: String = corpus.chars().take(6).collect();
    println!("From the corpus start: {}", model.generate(&seed_text, 200));

    // Generate from random windows of the model
    for i in 0..5 {
        let window = model.random_window().ok_or("Model is not trained")?;
        println!("Generated text {}: {}", i + 1, model.generate(&window, 80));
    }

    // Two models built with the same seed value learn and generate the same
    let mut twin = LanguageModel::with_seed(6, 7)?;
    let mut other = LanguageModel::with_seed(6, 7)?;
    twin.train(&corpus);
    other.train(&corpus);
    if twin.generate(&seed_text, 100) == other.generate(&seed_text, 100) {
        println!("Same seed value, same generated text");
    } else {
        println!("Should not happen");
    }

    // Dump the learned table ("<window> : <entries>" per line) to inspect
    // counts, probabilities and cumulative probabilities
    // Commented out, it gets large quickly
    // println!("{}", model);

    Ok(())
}
