use super::super::domain::Recommendation;
use super::config::RecommendationThresholds;

pub fn recommendation_for(score: i32, thresholds: &RecommendationThresholds) -> Recommendation {
    if score >= thresholds.buy {
        Recommendation::BuyConfidently
    } else if score >= thresholds.wait {
        Recommendation::WaitOrReassess
    } else {
        Recommendation::DoNotBuyYet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cut_points() {
        let thresholds = RecommendationThresholds::default();

        assert_eq!(recommendation_for(22, &thresholds), Recommendation::BuyConfidently);
        assert_eq!(recommendation_for(5, &thresholds), Recommendation::BuyConfidently);
        assert_eq!(recommendation_for(4, &thresholds), Recommendation::WaitOrReassess);
        assert_eq!(recommendation_for(2, &thresholds), Recommendation::WaitOrReassess);
        assert_eq!(recommendation_for(1, &thresholds), Recommendation::DoNotBuyYet);
        assert_eq!(recommendation_for(-12, &thresholds), Recommendation::DoNotBuyYet);
    }

    #[test]
    fn equal_thresholds_skip_the_wait_tier() {
        let thresholds = RecommendationThresholds { buy: 3, wait: 3 };

        assert_eq!(recommendation_for(3, &thresholds), Recommendation::BuyConfidently);
        assert_eq!(recommendation_for(2, &thresholds), Recommendation::DoNotBuyYet);
    }
}
