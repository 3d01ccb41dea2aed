//! Canned responses returned by the mock synthesizer.

pub const CAPTION: &str = "📸 CAPTION:
Living my best life and capturing every moment! ✨ This is what happiness looks like - authentic, unfiltered, and absolutely worth sharing with you all. What's making you smile today? 💫

💡 CALL-TO-ACTION:
Double tap if you agree! 👆 Drop a 💛 in the comments!

#️⃣ HASHTAGS:
#instagram #instagood #photooftheday #beautiful #happy #instadaily #lifestyle #inspiration #motivation #goals #love #life #vibes #aesthetic #dailyinspiration #positivevibes #goodvibes #blessed #grateful #instamoment

✅ Pro Tips:
- Post this during peak hours (9-11 AM or 7-9 PM)
- Respond to comments within the first hour
- Use Instagram Stories to boost visibility";

pub const SCHEDULE: &str = "📅 OPTIMAL POSTING SCHEDULE:

🌟 BEST DAYS TO POST:
1. Tuesday-Thursday: Highest engagement rates
2. Saturday mornings: Great for lifestyle content
3. Avoid Sundays (lower engagement)

⏰ OPTIMAL TIMES:
• Morning: 9:00 AM - 11:00 AM (commute/coffee time)
• Lunch: 12:00 PM - 1:00 PM (break time browsing)
• Evening: 7:00 PM - 9:00 PM (peak relaxation hours)

📊 POSTING FREQUENCY:
• 4-7 posts per week for optimal growth
• 2-3 Stories daily
• 3-4 Reels per week (highest reach potential)

🎯 CONTENT MIX:
• 40% Educational/Value content
• 30% Entertaining content
• 20% Behind-the-scenes
• 10% Promotional

💡 BONUS TIP: Post Reels on Wednesday/Thursday evenings for maximum reach!";

pub const ANALYSIS: &str = "📊 INSTAGRAM ACCOUNT ANALYSIS & GROWTH STRATEGY:

🎯 KEY INSIGHTS:
• Your engagement rate shows room for improvement
• Content consistency is crucial for growth
• Video content (Reels) is performing 3x better than static posts

📈 GROWTH RECOMMENDATIONS:

1. CONTENT STRATEGY:
   • Increase Reels frequency to 4-5 per week
   • Use trending audio (first 24 hours of trend)
   • Create series content to build anticipation
   • Post carousel posts (higher engagement)

2. ENGAGEMENT TACTICS:
   • Respond to comments within 1 hour of posting
   • Use 5-10 relevant hashtags (avoid overused ones)
   • Create interactive Stories (polls, questions, quizzes)
   • Collaborate with accounts in your niche

3. FOLLOWER GROWTH HACKS:
   • Post at consistent times daily
   • Engage with 50 accounts in your niche daily
   • Use geotags for local discovery
   • Cross-promote on other platforms

4. CONTENT PILLARS (focus on 3-4):
   • Educational tips
   • Behind-the-scenes
   • User-generated content
   • Inspirational quotes/stories

🎬 ACTION ITEMS THIS WEEK:
✅ Create 3 Reels using trending audio
✅ Design 2 carousel posts with valuable tips
✅ Engage with 20 accounts daily (genuine comments)
✅ Update bio with clear value proposition
✅ Plan next week's content calendar

📱 EXPECTED RESULTS (30 days):
• 15-25% increase in engagement rate
• 10-15% follower growth
• 30-40% increase in reach with Reels strategy";

pub const COMMENT_REPLIES: &str = "💬 RESPONSE OPTIONS:

OPTION 1 (Warm & Friendly):
\"Thank you so much! 💕 Your support means the world to me! How has your day been? Would love to hear from you!\"

OPTION 2 (Professional):
\"I really appreciate your feedback! It's wonderful to connect with engaged followers like you. Feel free to reach out if you have any questions!\"

OPTION 3 (Playful & Casual):
\"Aww you're the best! 🙌✨ Thanks for always showing love! What type of content would you like to see more of? Let me know! 👇\"

💡 ENGAGEMENT TIP:
Reply within 60 minutes of receiving the comment to boost your post in the algorithm. Ask questions to encourage further conversation and build community!";

pub const FALLBACK: &str = "AI response generated successfully! 🎉";
