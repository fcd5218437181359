//! Fills a sparse array with a handful of fruit at scattered offsets and
//! prints the resulting count, backing capacity and ordered contents for two
//! chunk sizes.

use sparse_chunked::SparseArray;

fn fill(chunk_size: usize) -> anyhow::Result<SparseArray<&'static str>> {
    let mut basket = SparseArray::with_chunk_size(chunk_size)?;
    basket.set(0, "banana")?;
    basket.set(11, "apple")?;
    basket.set(44, "grapes")?;
    basket.set(1, "kiwi")?;
    basket.set(11, "pears")?;
    basket.set(1000, "watermelon")?;
    basket.remove(44)?;
    Ok(basket)
}

fn main() -> anyhow::Result<()> {
    for chunk_size in [10, 5] {
        let basket = fill(chunk_size)?;
        println!("chunk size = {chunk_size}");
        println!("Count = {}", basket.len());
        println!("Size = {}", basket.capacity());
        println!("Elements:");
        for (offset, fruit) in &basket {
            println!("{offset} => {fruit}");
        }
        println!("{}", "=".repeat(50));
    }
    Ok(())
}
