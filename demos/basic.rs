use doc_similarity::{
    most_frequent_words, normalize, rank_by_frequency, similarity_score, tokenize,
    word_frequencies,
};

fn main() {
    // normalize raw text the way the document loader does
    let text1 = normalize("Rust is fast. Rust is safe!");
    let text2 = normalize("Rust is flexible, and Rust is fun.");

    // make word frequencies
    let freq1 = word_frequencies(&tokenize(&text1));
    let freq2 = word_frequencies(&tokenize(&text2));

    println!("ranked doc1: {:?}", rank_by_frequency(&freq1));
    println!("ranked doc2: {:?}", rank_by_frequency(&freq2));

    match most_frequent_words(&freq1, &freq2) {
        Ok(words) => println!("most frequent: {:?}", words),
        Err(e) => eprintln!("[error] {}", e),
    }
    match similarity_score(&freq1, &freq2) {
        Ok(score) => println!("similarity: {:.2}", score),
        Err(e) => eprintln!("[error] {}", e),
    }
}
