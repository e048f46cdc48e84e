//! Built-in topic content: three grammar units from the grade 8 English
//! curriculum. Lesson bodies are markdown; the TUI decides how they look.
//!
//! The data is deliberately dumb: plain constructors, no macros. Adding a
//! topic means adding a function here and listing it in [`builtin`].

use crate::core::catalog::{Lesson, QuizQuestion, Topic};

/// App title shown on the home screen.
pub const APP_TITLE: &str = "國二英文大進擊";
/// Tagline under the title.
pub const APP_TAGLINE: &str = "快樂學文法，考試頂瓜瓜！🎉";
/// Footer credit on the home screen.
pub const APP_CREDIT: &str = "Based on Grade 8 English Grammar Curriculum";

fn lesson(title: &str, body: &str, example: &str) -> Lesson {
    Lesson {
        title: title.to_string(),
        body: body.to_string(),
        example: example.to_string(),
    }
}

fn question(prompt: &str, options: &[&str], answer: usize, explanation: &str) -> QuizQuestion {
    QuizQuestion {
        prompt: prompt.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        answer,
        explanation: explanation.to_string(),
    }
}

/// The full shipped catalog, in menu order.
pub fn builtin() -> Vec<Topic> {
    vec![transport(), leisure(), directions()]
}

fn transport() -> Topic {
    Topic {
        id: "transport",
        title: "交通工具趴趴走".to_string(),
        color: (0x3b, 0x82, 0xf6), // blue
        lessons: vec![
            lesson(
                "如何詢問交通方式?",
                "句型公式：\n\n\
                 ```\n\
                 How + do/does/did + 主詞 + go/get to + 地點?\n\
                 ```\n\n\
                 ✨ 記得：如果是問 **How can...?** 助動詞就用 can 哦！",
                "How can we get to the metro station? (我們如何到捷運站呢？)",
            ),
            lesson(
                "搭乘方式：By vs In/On",
                "**方法 A: by + 交通工具**\n\n\
                 ⚠️ 絕對不加 a/an/the！用單數！\n\n\
                 Ex: by bus, by car, by train\n\n\
                 **方法 B: in/on + 冠詞 + 交通工具**\n\n\
                 - **on** a bus/train/bike (身體能站直/跨坐)\n\
                 - **in** a car/taxi (要彎腰進去)",
                "I go there by bus. = I go there on a bus.",
            ),
            lesson(
                "動詞大亂鬥：Take, Ride, Drive, Fly",
                "- 🚌 **take**: 搭乘 (bus, train, taxi, metro)\n\
                 - 🚲 **ride**: 騎 (bike, scooter, motorcycle)\n\
                 - 🚗 **drive**: 駕駛 (car, taxi)\n\
                 - ✈️ **fly**: 開飛機 (plane)",
                "David flies an airplane to Japan. (David 開飛機去日本)",
            ),
            lesson(
                "上下車要用哪一個?",
                "🚕 **Get in / Get out of**\n\n\
                 適用：Car, Taxi (小車)\n\n\
                 🚌 **Get on / Get off**\n\n\
                 適用：Bus, Train, Plane, Boat (大車/板子)",
                "Mom got in the car. / Andy is ready to get off the plane.",
            ),
        ],
        quiz: vec![
            question(
                "Meg went to her grandpa's house ___ bus.",
                &["on a", "by", "in", "by a"],
                1,
                "使用 by 時，後面直接加交通工具單數，不加冠詞 (a/the)。",
            ),
            question(
                "Judy goes to the metro station ___ a bike.",
                &["by", "in", "on", "at"],
                2,
                "腳踏車 (bike) 是跨坐的交通工具，加上冠詞 'a' 時要搭配介系詞 on。",
            ),
            question(
                "Which one is CORRECT? (哪句是對的?)",
                &[
                    "He gets on the car.",
                    "He gets in the car.",
                    "He gets on the taxi.",
                    "He gets out the bus.",
                ],
                1,
                "轎車 (car) 的空間較小，上下車要用 get in / get out of。",
            ),
            question(
                "Dad likes to go to his office ___ foot.",
                &["by", "in", "on", "with"],
                2,
                "走路固定用法為 on foot (= walk)。",
            ),
        ],
    }
}

fn leisure() -> Topic {
    Topic {
        id: "leisure",
        title: "週末玩什麼".to_string(),
        color: (0x10, 0xb9, 0x81), // green
        lessons: vec![
            lesson(
                "Go + V-ing 公式",
                "當我們談論休閒活動時，最常用的句型就是：\n\n\
                 ```\n\
                 Go + V-ing\n\
                 ```\n\n\
                 - ⛺ go camping (去露營)\n\
                 - 🎣 go fishing (去釣魚)\n\
                 - 🛍️ go shopping (去購物)\n\
                 - 🏄 go surfing (去衝浪)\n\
                 - 🏃 go jogging (去慢跑)\n\
                 - 🏊 go swimming (去游泳)",
                "I go swimming in my free time.",
            ),
            lesson(
                "Go + 單數名詞 + V-ing",
                "有些活動是「針對某個東西」去做的，中間要加名詞！\n\n\
                 ```\n\
                 Go + 單數名詞 + V-ing\n\
                 ```\n\n\
                 ⚠️ 這裡的名詞前面不能加 a/the 哦！\n\n\
                 - 🐦 **go bird watching** (去賞鳥)\n\
                 - 🐋 **go whale watching** (去賞鯨)\n\
                 - 🧗 **go mountain climbing** (去爬山)\n\
                 - 🐴 **go horseback riding** (去騎馬)",
                "We went whale watching last summer.",
            ),
            lesson(
                "只看不買? Window Shopping",
                "👀 **go window shopping**\n\n\
                 意思是「去逛街(只看不買)」。\n\n\
                 > 想像你是隔著櫥窗 (window) 在看商品，\
                 所以叫 window shopping！",
                "I don't have money, so I just go window shopping.",
            ),
        ],
        quiz: vec![
            question(
                "My father likes to go ___ on weekends.",
                &["camp", "camping", "camps", "to camp"],
                1,
                "休閒活動句型為 Go + V-ing，所以要選 camping。",
            ),
            question(
                "Let's go ___ watching this afternoon.",
                &["birds", "a bird", "bird", "the bird"],
                2,
                "句型為 Go + 單數名詞 + V-ing。名詞要用單數且不加冠詞，所以選 bird。",
            ),
            question(
                "Do you want to go ___ climbing?",
                &["mountain", "mountains", "mountain's", "a mountain"],
                0,
                "爬山是 go mountain climbing (用單數名詞)。",
            ),
        ],
    }
}

fn directions() -> Topic {
    Topic {
        id: "directions",
        title: "迷路大冒險".to_string(),
        color: (0xf5, 0x9e, 0x0b), // amber
        lessons: vec![
            lesson(
                "如何問路?",
                "記得先說 **Excuse me** (不好意思) 表示禮貌！\n\n\
                 - ❓ **Where is** the bank?\n\
                 - ❓ **How can I get to** the station?\n\
                 - ❓ **Which is the way to** the market?\n\
                 - ❓ **Could you tell me the way to**...?\n\n\
                 💡 記得：get there / get here 前面不用加 to 喔！",
                "Excuse me, how do I get to the night market from here?",
            ),
            lesson(
                "方位介系詞 (在哪裡?)",
                "- **across from** 在...對面\n\
                 - **next to** 在...隔壁\n\
                 - **between A and B** 在A與B之間\n\
                 - **on the corner of** 在...轉角",
                "The library is across from the bank. (圖書館在銀行對面)",
            ),
            lesson(
                "指引方向 (怎麼走?)",
                "- ⬆️ **Go straight / Go along** (直走/沿著走)\n\
                 - ↩️ **Turn left / Make a left turn** (左轉)\n\
                 - ↪️ **Turn right** (右轉)\n\
                 - 🦓 **Cross the street** (過馬路)",
                "Go straight for two blocks and turn left.",
            ),
        ],
        quiz: vec![
            question(
                "The bank is ___ from the school.",
                &["across", "cross", "next", "between"],
                0,
                "Across from 是片語「在...對面」。Cross 是動詞「穿越」。",
            ),
            question(
                "Go straight ___ two blocks.",
                &["at", "for", "in", "to"],
                1,
                "持續走一段距離或時間，介系詞用 for (例如: for two blocks, for 10 minutes)。",
            ),
            question(
                "How can we get ___?",
                &["to there", "there", "to here", "at there"],
                1,
                "here 和 there 是地方副詞，前面不需要加 to。",
            ),
            question(
                "Turn right ___ Station Road.",
                &["in", "at", "on", "for"],
                2,
                "在某條路上轉彎，介系詞用 on。",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_content() {
        for topic in builtin() {
            assert!(!topic.lessons.is_empty(), "{} has no lessons", topic.id);
            assert!(!topic.quiz.is_empty(), "{} has no quiz", topic.id);
            for lesson in &topic.lessons {
                assert!(!lesson.title.is_empty());
                assert!(!lesson.body.is_empty());
                assert!(!lesson.example.is_empty());
            }
        }
    }

    #[test]
    fn every_answer_index_is_valid() {
        for topic in builtin() {
            for (i, q) in topic.quiz.iter().enumerate() {
                assert!(q.options.len() >= 2, "{} q{} too few options", topic.id, i);
                assert!(q.answer < q.options.len(), "{} q{} answer out of range", topic.id, i);
                assert!(!q.explanation.is_empty(), "{} q{} missing explanation", topic.id, i);
            }
        }
    }

    #[test]
    fn topic_ids_are_unique() {
        let topics = builtin();
        for (i, a) in topics.iter().enumerate() {
            for b in &topics[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
