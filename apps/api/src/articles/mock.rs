//! Mock article body used when no Gemini key is configured.
//!
//! The template interpolates the primary keyword and ten selected-keyword
//! slots; keyword indexes wrap, so shorter selections still fill every
//! slot. The body intentionally matches the shape the drafting prompt asks
//! for: no H1, five H2 sections, bolded keywords, around 800 words.

const MOCK_BODY_TEMPLATE: &str = r#"In today's competitive digital landscape, **{primary}** has become more crucial than ever for businesses looking to establish their online presence and drive meaningful results. Whether you're a startup founder, marketing professional, or business owner, understanding the intricacies of **{kw0}** can make the difference between success and mediocrity.

The world of **{primary}** is constantly evolving, with new strategies and techniques emerging regularly. Recent studies show that companies implementing comprehensive **{kw1}** strategies see an average increase of 40% in their overall performance metrics. This statistic alone highlights the importance of staying current with industry best practices.

## Understanding the Fundamentals

Before diving into advanced strategies, it's essential to grasp the core principles that drive successful **{primary}** implementation. The foundation lies in understanding your target audience and their specific needs, preferences, and pain points.

**{kw2}** plays a pivotal role in this process. By leveraging data-driven insights, businesses can create more targeted and effective campaigns that resonate with their intended audience. This approach not only improves engagement rates but also maximizes return on investment.

Consider these key factors when developing your strategy:

The integration of **{kw3}** into your overall approach ensures comprehensive coverage of all essential elements. Modern consumers expect personalized experiences, and businesses that fail to deliver on this expectation often struggle to maintain competitive advantage.

## Advanced Strategies That Drive Results

Moving beyond basic implementation, successful **{primary}** requires sophisticated techniques that address the nuances of modern consumer behavior. **{kw4}** has emerged as a critical component in this advanced approach.

Industry leaders consistently emphasize the importance of continuous optimization and testing. This iterative process allows businesses to refine their strategies based on real-world performance data, leading to increasingly effective outcomes over time.

The role of technology in enhancing **{kw5}** capabilities cannot be overstated. Artificial intelligence and machine learning algorithms now enable unprecedented levels of personalization and automation, streamlining processes that once required significant manual effort.

## Implementation Best Practices

Successfully executing a **{primary}** strategy demands careful attention to detail and systematic implementation. **{kw6}** should be integrated seamlessly throughout all touchpoints of the customer journey.

Start by establishing clear objectives and key performance indicators. These metrics will serve as your roadmap, helping you measure progress and make data-driven adjustments as needed. Remember that **{kw7}** effectiveness often depends on consistent monitoring and optimization.

Collaboration between different departments within your organization ensures alignment and maximizes the impact of your efforts. When teams work together toward common goals, the synergistic effect often produces results that exceed individual contributions.

## Measuring Success and ROI

The true value of any **{primary}** initiative lies in its measurable impact on business outcomes. **{kw8}** provides valuable insights into campaign performance and areas for improvement.

Establish a comprehensive analytics framework that tracks both short-term and long-term metrics. While immediate results are important, the compound effect of sustained **{kw9}** efforts often produces the most significant long-term value.

Regular reporting and analysis enable proactive adjustments to your strategy, ensuring optimal performance even as market conditions and consumer preferences evolve.

## Conclusion

The landscape of **{primary}** continues to evolve at a rapid pace, presenting both opportunities and challenges for businesses across all industries. Success in this environment requires a combination of strategic thinking, tactical execution, and continuous adaptation.

By focusing on **{kw0}** and implementing the strategies outlined in this guide, organizations can position themselves for sustainable growth and competitive advantage. The key lies in maintaining a balance between proven methodologies and innovative approaches that address emerging trends and technologies.

Remember that **{primary}** is not a one-time effort but an ongoing process that requires dedication, resources, and patience. The businesses that understand this fundamental truth and commit to long-term excellence will ultimately reap the greatest rewards in today's dynamic marketplace."#;

/// Builds the mock article body for the given keywords.
pub fn mock_article_body(primary_keyword: &str, selected_keywords: &[String]) -> String {
    let slot = |i: usize| -> &str {
        if selected_keywords.is_empty() {
            primary_keyword
        } else {
            &selected_keywords[i % selected_keywords.len()]
        }
    };

    let mut body = MOCK_BODY_TEMPLATE.replace("{primary}", primary_keyword);
    for i in 0..10 {
        body = body.replace(&format!("{{kw{i}}}"), slot(i));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn body_has_the_expected_skeleton() {
        let body = mock_article_body("seo", &keywords(&["a", "b", "c", "d", "e"]));
        assert!(!body.starts_with("# "));
        assert_eq!(body.lines().filter(|l| l.starts_with("## ")).count(), 5);
        assert!(body.contains("**seo**"));
        assert!(!body.contains("{primary}"));
        assert!(!body.contains("{kw"));
    }

    #[test]
    fn keyword_slots_wrap_for_short_selections() {
        let body = mock_article_body("seo", &keywords(&["first", "second", "third", "x", "y"]));
        // Slot 5 wraps back to the first selected keyword.
        assert!(body.contains("enhancing **first** capabilities"));
    }

    #[test]
    fn empty_selection_falls_back_to_the_primary_keyword() {
        let body = mock_article_body("seo", &[]);
        assert!(body.contains("intricacies of **seo**"));
        assert!(!body.contains("{kw0}"));
    }

    #[test]
    fn body_is_long_enough_to_read_like_an_article() {
        let body = mock_article_body("topic", &keywords(&["a", "b", "c", "d", "e"]));
        assert!(body.split_whitespace().count() > 500);
    }
}
