//! Built-in Luxottica brand list.

use super::BrandEntry;

pub(super) fn luxottica_entries() -> Vec<BrandEntry> {
    vec![
        BrandEntry::new("Alain Mikli", &["Alain Mikli"], &["AO"]),
        BrandEntry::new("Armani Exchange", &["Armani Exchange"], &["AX"]),
        BrandEntry::new("Burberry", &["Burberry", "Burberry Junior"], &["BE", "JB"]),
        BrandEntry::new("Chanel", &["Chanel"], &["CH"]),
        BrandEntry::new("Coach", &["Coach"], &["HC"]),
        BrandEntry::new("Dolce & Gabbana", &["Dolce & Gabbana"], &["DG"]),
        BrandEntry::new(
            "Emporio Armani",
            &["Emporio Armani", "Emporio Armani Kids"],
            &["EA", "EK"],
        ),
        BrandEntry::new("Giorgio Armani", &["Giorgio Armani"], &["AR", "GA"]),
        BrandEntry::new("Michael Kors", &["Michael Kors"], &["MK"]),
        BrandEntry::new("Miu Miu", &["Miu Miu"], &["MU"]),
        BrandEntry::new(
            "Oakley",
            &["Oakley", "Oakley Kids"],
            &["OO", "SOK", "FOK", "OX", "OY", "OJF", "OK", "OJ"],
        ),
        BrandEntry::new("Oliver Peoples", &["Oliver Peoples"], &["OV"]),
        BrandEntry::new("Persol", &["Persol"], &["PO"]),
        BrandEntry::new("Prada", &["Prada", "Prada Linea Rossa"], &["PR", "PS"]),
        BrandEntry::new("Ray-Ban", &["Ray-Ban", "Rayban"], &["RB", "RX", "RY", "RJ", "RW"]),
        BrandEntry::new("Starck Eyes", &["Starck Eyes"], &["SH"]),
        BrandEntry::new("Tiffany", &["Tiffany & Co."], &["TF"]),
        BrandEntry::new("Versace", &["Versace", "Versace Kids"], &["VE", "VK"]),
        BrandEntry::new("Vogue", &["Vogue Eyewear", "Vogue"], &["VO"]),
        BrandEntry::new("Bvlgari", &["Bvlgari"], &["BV"]),
        BrandEntry::new("Polo Ralph Lauren", &["Polo Ralph Lauren"], &["PH"]),
        BrandEntry::new("Swarovski", &["Swarovski"], &["SK"]),
        BrandEntry::new("Miraflex", &["Miraflex"], &["MF"]),
        BrandEntry::new("Jimmy Choo", &["Jimmy Choo"], &["JC"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_upper_case_letters() {
        for entry in luxottica_entries() {
            for code in &entry.codes {
                assert!((2..=3).contains(&code.len()), "{code}");
                assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{code}");
            }
        }
    }

    #[test]
    fn test_codes_are_unique_across_brands() {
        let mut seen = HashSet::new();
        for entry in luxottica_entries() {
            for code in &entry.codes {
                assert!(seen.insert(code.clone()), "duplicate code {code}");
            }
        }
    }
}
