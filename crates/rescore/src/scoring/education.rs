//! Degree classification by keyword priority: the first tier with any hit
//! wins. Plain substring containment on lowercased text, unlike skill
//! matching, because tokens like "b.tech" don't sit on clean word boundaries.

const DOCTORATE_KEYWORDS: &[&str] = &["phd", "doctorate"];
const MASTERS_KEYWORDS: &[&str] = &["masters", "m.tech", "mba"];
const BACHELORS_KEYWORDS: &[&str] = &["bachelor", "b.tech", "b.e"];

pub fn education_score(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let hit = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if hit(DOCTORATE_KEYWORDS) {
        100
    } else if hit(MASTERS_KEYWORDS) {
        90
    } else if hit(BACHELORS_KEYWORDS) {
        80
    } else {
        50
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tier_scores() {
        assert_eq!(education_score("PhD in Computer Science"), 100);
        assert_eq!(education_score("Doctorate from IISc"), 100);
        assert_eq!(education_score("Masters in Data Science"), 90);
        assert_eq!(education_score("M.Tech, 2019"), 90);
        assert_eq!(education_score("MBA in Finance"), 90);
        assert_eq!(education_score("Bachelor of Science"), 80);
        assert_eq!(education_score("B.Tech in ECE"), 80);
        assert_eq!(education_score("B.E. Mechanical"), 80);
    }

    #[test]
    fn test_highest_tier_wins_regardless_of_order() {
        let text = "Bachelor of Engineering, then Masters, finally a PhD";
        assert_eq!(education_score(text), 100);
        assert_eq!(education_score("Bachelor then Masters"), 90);
    }

    #[test]
    fn test_no_degree_keywords_is_baseline() {
        assert_eq!(education_score("self-taught systems programmer"), 50);
        assert_eq!(education_score(""), 50);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(education_score("pHd candidate"), 100);
        assert_eq!(education_score("mba graduate"), 90);
    }
}
